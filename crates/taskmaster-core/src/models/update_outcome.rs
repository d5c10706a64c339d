use serde::{Deserialize, Serialize};

/// What a successful `update` did to the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UpdateOutcome {
    /// The name was already tracked; its payload was replaced in place.
    Refreshed,
    /// A new name was appended below capacity.
    Admitted,
    /// The history was full: the tail entry was dropped and the new name
    /// took its slot.
    Rotated { evicted: String },
}

impl UpdateOutcome {
    /// Name evicted by this update, if any.
    pub fn evicted(&self) -> Option<&str> {
        match self {
            Self::Rotated { evicted } => Some(evicted),
            _ => None,
        }
    }
}
