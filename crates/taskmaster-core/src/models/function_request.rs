use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Identity of one function invocation.
///
/// Two requests refer to the same function iff their `fn_name`s match;
/// `fn_parameters` is payload and plays no part in identity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionRequest {
    /// Function name. Must be non-empty to be accepted by a predictor.
    pub fn_name: String,
    /// Parameter name to parameter value.
    #[serde(default)]
    pub fn_parameters: HashMap<String, String>,
}

impl FunctionRequest {
    /// Request with no parameters.
    pub fn new(fn_name: impl Into<String>) -> Self {
        Self {
            fn_name: fn_name.into(),
            fn_parameters: HashMap::new(),
        }
    }

    /// Builder-style parameter insertion. A repeated key keeps the last value.
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fn_parameters.insert(name.into(), value.into());
        self
    }

    /// Look up a parameter value.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.fn_parameters.get(name).map(String::as_str)
    }
}
