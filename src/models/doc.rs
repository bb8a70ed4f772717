use serde::{Deserialize, Serialize};

/// Parsed documentation of a whole project
///
/// Built by the comment parser; the render stage only reorders `apis`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doc {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub apis: Vec<Api>,
}

/// One documented API endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Api {
    #[serde(default)]
    pub method: String,

    pub url: String,

    #[serde(default)]
    pub summary: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Api {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            ..Default::default()
        }
    }
}
