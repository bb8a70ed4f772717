use super::FieldError;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::fs;

/// Where and how the documentation is rendered.
///
/// `kind` is kept as the raw string from the file; the render dispatcher
/// decides whether it names a supported format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Output format: `html`, `html+` or `json`
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Directory the documentation is written to
    #[serde(default)]
    pub dir: Utf8PathBuf,
}

impl OutputOptions {
    /// Validate `dir`, creating it and any missing ancestors.
    ///
    /// Calling this again on an existing directory is a no-op.
    pub fn init(&self) -> Result<(), FieldError> {
        if self.dir.as_str().is_empty() {
            return Err(FieldError::new("dir", "must not be empty"));
        }

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| {
                FieldError::io("dir", format!("failed to create {}", self.dir), e)
            })?;
            tracing::debug!("Created output directory {}", self.dir);
        } else if !self.dir.is_dir() {
            return Err(FieldError::new(
                "dir",
                format!("{} exists and is not a directory", self.dir),
            ));
        }

        Ok(())
    }
}
