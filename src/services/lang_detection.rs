//! Source language detection for scaffolding new configurations.
//!
//! A directory's language is the supported language with the most matching
//! source files underneath it. Ties go to whichever language comes first in
//! [`LANGUAGES`].
//!
//! # Examples
//!
//! ```ignore
//! use apidoc::services::lang_detection::{detect_dir_lang, language_by_name};
//! use camino::{Utf8Path, Utf8PathBuf};
//!
//! let lang = detect_dir_lang(Utf8Path::new("./server"))?;
//! assert!(language_by_name(&lang).is_some());
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use std::io;
use thiserror::Error;
use walkdir::WalkDir;

/// A source language the comment parser understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    pub exts: &'static [&'static str],
}

/// Every supported language with its default file extensions
pub const LANGUAGES: &[Language] = &[
    Language { name: "go", exts: &[".go"] },
    Language { name: "rust", exts: &[".rs"] },
    Language { name: "c++", exts: &[".h", ".c", ".cpp", ".cxx", ".hpp"] },
    Language { name: "c#", exts: &[".cs"] },
    Language { name: "java", exts: &[".java"] },
    Language { name: "javascript", exts: &[".js"] },
    Language { name: "typescript", exts: &[".ts"] },
    Language { name: "php", exts: &[".php"] },
    Language { name: "python", exts: &[".py"] },
    Language { name: "ruby", exts: &[".rb"] },
    Language { name: "perl", exts: &[".perl", ".prl", ".pl"] },
    Language { name: "scala", exts: &[".scala"] },
    Language { name: "swift", exts: &[".swift"] },
];

/// Errors from [`detect_dir_lang`]
#[derive(Error, Debug)]
pub enum DetectError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No supported source files found in {0}")]
    NoSourceFiles(Utf8PathBuf),
}

/// Look up a language by its exact name.
pub fn language_by_name(name: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.name == name)
}

/// Look up the language owning a file extension (`.rs`, `rs`, `.RS` all match).
pub fn language_by_ext(ext: &str) -> Option<&'static Language> {
    let ext = ext.trim_start_matches('.').to_lowercase();
    LANGUAGES
        .iter()
        .find(|lang| lang.exts.iter().any(|e| e[1..] == ext))
}

/// Detects the dominant source language under `dir`.
///
/// Walks the whole tree, skipping hidden files and directories such as `.git`.
///
/// # Errors
///
/// - [`DetectError::Io`] if the tree cannot be walked
/// - [`DetectError::NoSourceFiles`] if no file has a supported extension
pub fn detect_dir_lang(dir: &Utf8Path) -> Result<String, DetectError> {
    let mut counts: IndexMap<&'static str, usize> =
        LANGUAGES.iter().map(|lang| (lang.name, 0)).collect();

    let walker = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()));

    for entry in walker {
        let entry = entry.map_err(|e| DetectError::Io {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(ext) = entry.path().extension().and_then(|ext| ext.to_str()) else {
            continue;
        };

        if let Some(lang) = language_by_ext(ext) {
            if let Some(count) = counts.get_mut(lang.name) {
                *count += 1;
            }
        }
    }

    // max_by_key keeps the last maximum, so compare in reverse to favour table order
    let best = counts
        .iter()
        .rev()
        .max_by_key(|(_, count)| **count)
        .filter(|(_, count)| **count > 0)
        .map(|(name, _)| name.to_string());

    match best {
        Some(lang) => {
            tracing::info!("Detected source language {} in {}", lang, dir);
            Ok(lang)
        }
        None => Err(DetectError::NoSourceFiles(dir.to_path_buf())),
    }
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|name| name.starts_with('.'))
}
