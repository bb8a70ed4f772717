//! Data models for apidoc.
//!
//! - [`Config`]: the validated contents of `apidoc.json`
//! - [`InputOptions`]: one source tree to scan
//! - [`OutputOptions`]: the render destination and format
//! - [`Doc`]/[`Api`]: the parsed documentation model consumed by the render stage
//! - [`FieldError`]: validation failure naming the offending field

pub mod config;
pub mod doc;
pub mod error;
pub mod input;
pub mod output;

pub use config::Config;
pub use doc::{Api, Doc};
pub use error::FieldError;
pub use input::InputOptions;
pub use output::OutputOptions;
