// apidoc - configuration and render dispatch for an API documentation generator
//
// This is the library crate: loading and scaffolding `apidoc.json`, the shared
// diagnostic sink, and the render dispatcher. The binary crate (main.rs) is a
// thin command-line wrapper around it.

pub mod config;
pub mod diagnostics;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{ConfigError, generate_config, load_config};
pub use diagnostics::{Diagnostics, Severity, Sink};
pub use models::{Api, Config, Doc, FieldError, InputOptions, OutputOptions};
pub use services::{Dispatcher, Format, RenderError, RenderReport, Renderer};

/// Application version, also written into scaffolded configurations
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Default configuration file name
pub const CONFIG_FILENAME: &str = "apidoc.json";
