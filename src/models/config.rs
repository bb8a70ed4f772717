use super::{InputOptions, OutputOptions};
use serde::{Deserialize, Serialize};

/// Project configuration from `apidoc.json`
///
/// Anything that changes how the documentation is produced belongs here;
/// document content such as titles and versions lives in the source comments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Version of the generator that wrote this file
    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub inputs: Vec<InputOptions>,

    #[serde(default)]
    pub output: Option<OutputOptions>,
}

impl Config {
    /// The output descriptor; only `None` before validation.
    pub fn output(&self) -> Option<&OutputOptions> {
        self.output.as_ref()
    }
}
