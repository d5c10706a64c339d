//! Anchor-preserving bounded history.
//!
//! Ordered head to tail by first arrival. Once full, a new distinct name
//! replaces only the tail entry, so the first `capacity - 1` names observed
//! stay pinned at the head until the history is cleared.

use serde::Serialize;
use taskmaster_core::{FunctionRequest, UpdateOutcome};

/// A tracked function name and the latest request observed for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackedEntry {
    request: FunctionRequest,
}

impl TrackedEntry {
    fn new(request: FunctionRequest) -> Self {
        Self { request }
    }

    /// The tracked function name.
    pub fn fn_name(&self) -> &str {
        &self.request.fn_name
    }

    /// Most recently observed request for this name.
    pub fn request(&self) -> &FunctionRequest {
        &self.request
    }
}

/// Capacity-bounded sequence of [`TrackedEntry`] with unique names.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<TrackedEntry>,
    capacity: usize,
}

impl History {
    /// Empty history. `capacity` is validated by the caller and must be >= 1.
    pub(crate) fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Record one observation. The caller has already rejected empty names.
    pub(crate) fn observe(&mut self, request: FunctionRequest) -> UpdateOutcome {
        if let Some(idx) = self.position(&request.fn_name) {
            self.entries[idx].request = request;
            return UpdateOutcome::Refreshed;
        }

        if self.entries.len() < self.capacity {
            self.entries.push(TrackedEntry::new(request));
            return UpdateOutcome::Admitted;
        }

        // Full (and capacity >= 1, so non-empty): swap out the tail only.
        let tail = self.entries.len() - 1;
        let old = std::mem::replace(&mut self.entries[tail], TrackedEntry::new(request));
        UpdateOutcome::Rotated {
            evicted: old.request.fn_name,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Index of `fn_name`, head = 0.
    pub fn position(&self, fn_name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.fn_name() == fn_name)
    }

    pub fn contains(&self, fn_name: &str) -> bool {
        self.position(fn_name).is_some()
    }

    /// The anchor: earliest-observed name still retained.
    pub fn head(&self) -> Option<&TrackedEntry> {
        self.entries.first()
    }

    /// The most recently admitted entry.
    pub fn tail(&self) -> Option<&TrackedEntry> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[TrackedEntry] {
        &self.entries
    }

    /// Tracked names, head first.
    pub fn function_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.fn_name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
