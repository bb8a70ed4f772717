//! Loading, validating and scaffolding `apidoc.json`.

use crate::diagnostics::Diagnostics;
use crate::models::{Config, FieldError, InputOptions, OutputOptions};
use crate::services::lang_detection::detect_dir_lang;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io;
use thiserror::Error;

/// Name of the generated output directory, relative to the project root
pub const DEFAULT_OUTPUT_DIR: &str = "doc";

/// Output type written into scaffolded configurations
pub const DEFAULT_OUTPUT_TYPE: &str = "html";

/// Errors from [`load_config`] and [`generate_config`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Invalid configuration field {0}")]
    Field(#[from] FieldError),
}

impl ConfigError {
    /// Name of the failing field, for [`ConfigError::Field`]
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::Field(err) => Some(&err.field),
            _ => None,
        }
    }
}

/// Load `path` into a fully initialized [`Config`].
///
/// Checks run in a fixed order and the first failure is returned:
/// read, parse, `version`, `inputs`, `output`, each input's `init`, then the
/// output's `init`. Every input gets a clone of `diagnostics` as its syntax
/// log. The output directory is created if missing.
pub fn load_config(path: &Utf8Path, diagnostics: &Diagnostics) -> Result<Config, ConfigError> {
    let data = fs::read(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut config: Config =
        serde_json::from_slice(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    validate(&config)?;

    for input in config.inputs.iter_mut() {
        input.init()?;
        input.syntax_log = Some(diagnostics.clone());
        tracing::debug!("Initialized input {} ({})", input.dir, input.lang);
    }

    if let Some(output) = config.output() {
        output.init()?;
    }

    tracing::info!(
        "Loaded config from {}: version {}, {} inputs",
        path,
        config.version,
        config.inputs.len()
    );
    Ok(config)
}

fn validate(config: &Config) -> Result<(), FieldError> {
    if semver::Version::parse(&config.version).is_err() {
        return Err(FieldError::new(
            "version",
            format!("{:?} is not a valid semantic version", config.version),
        ));
    }

    if config.inputs.is_empty() {
        return Err(FieldError::new("inputs", "must not be empty"));
    }

    if config.output.is_none() {
        return Err(FieldError::new("output", "must not be empty"));
    }

    Ok(())
}

/// Build the default configuration for the project rooted at `dir`.
///
/// Language detection failure is reported as a warning and leaves `lang`
/// empty.
pub fn default_config(dir: &Utf8Path, diagnostics: &Diagnostics) -> Config {
    let lang = match detect_dir_lang(dir) {
        Ok(lang) => lang,
        Err(e) => {
            diagnostics.warn(&e);
            String::new()
        }
    };

    Config {
        version: crate::VERSION.to_string(),
        inputs: vec![InputOptions {
            dir: dir.to_path_buf(),
            recursive: true,
            lang,
            ..Default::default()
        }],
        output: Some(OutputOptions {
            kind: DEFAULT_OUTPUT_TYPE.to_string(),
            dir: dir.join(DEFAULT_OUTPUT_DIR),
        }),
    }
}

/// Write a default configuration to `path`.
///
/// The parent directory of `path` is the project root; a bare file name means
/// the current directory. Existing files are overwritten.
pub fn generate_config(path: &Utf8Path, diagnostics: &Diagnostics) -> Result<(), ConfigError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent.to_path_buf(),
        _ => Utf8PathBuf::from("."),
    };

    let config = default_config(&dir, diagnostics);
    let data = to_pretty_json(&config).map_err(ConfigError::Serialize)?;

    fs::write(path, data).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Generated config at {}", path);
    Ok(())
}

/// JSON with 4-space indentation
fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(buf)
}
