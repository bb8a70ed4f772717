use super::FieldError;
use crate::diagnostics::Diagnostics;
use crate::services::lang_detection::language_by_name;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// One source tree to scan for documentation comments.
///
/// Read from the `inputs` array of `apidoc.json`. The syntax log is not part of
/// the file; the loader injects the run's shared [`Diagnostics`] after
/// [`init`](Self::init) succeeds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputOptions {
    /// Directory to scan
    #[serde(default)]
    pub dir: Utf8PathBuf,

    /// Whether subdirectories are scanned too
    #[serde(default)]
    pub recursive: bool,

    /// Source language of the files in `dir`
    #[serde(default)]
    pub lang: String,

    /// File extensions to scan; defaults to the language's extensions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exts: Vec<String>,

    /// Where syntax problems found while scanning are reported
    #[serde(skip)]
    pub syntax_log: Option<Diagnostics>,
}

impl InputOptions {
    /// Validate the descriptor and fill in defaults.
    pub fn init(&mut self) -> Result<(), FieldError> {
        if self.dir.as_str().is_empty() {
            return Err(FieldError::new("dir", "must not be empty"));
        }

        if !self.dir.is_dir() {
            return Err(FieldError::new(
                "dir",
                format!("directory {} does not exist", self.dir),
            ));
        }

        if self.lang.is_empty() {
            return Err(FieldError::new("lang", "must not be empty"));
        }

        let language = language_by_name(&self.lang).ok_or_else(|| {
            FieldError::new("lang", format!("unsupported language {}", self.lang))
        })?;

        if self.exts.is_empty() {
            self.exts = language.exts.iter().map(|ext| ext.to_string()).collect();
        } else if self.exts.iter().any(|ext| ext.trim().trim_start_matches('.').is_empty()) {
            return Err(FieldError::new("exts", "must not contain empty extensions"));
        } else {
            self.exts = self.exts.iter().map(|ext| normalize_ext(ext)).collect();
        }

        Ok(())
    }
}

fn normalize_ext(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}
