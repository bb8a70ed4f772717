//! Services module - the processing stages between a loaded configuration and
//! rendered documentation.
//!
//! # Components
//!
//! - [`lang_detection`]: guesses a project's source language when scaffolding
//!   a new `apidoc.json`
//! - [`render`]: the [`Dispatcher`] that orders a parsed [`Doc`](crate::models::Doc)
//!   and routes it to the renderer for the configured output format
//! - [`json`]: the built-in JSON renderer
//!
//! The comment parser and the HTML renderers are not part of this crate.
//! HTML renderers plug in through the [`Renderer`] trait.
//!
//! # Usage Example
//!
//! ```ignore
//! use apidoc::services::Dispatcher;
//!
//! let dispatcher = Dispatcher::new().with_html(MyHtmlRenderer::default());
//! let report = dispatcher.render(&mut doc, output, &diagnostics)?;
//! tracing::info!("done in {:?}", report.elapsed);
//! ```

pub mod json;
pub mod lang_detection;
pub mod render;

pub use json::JsonRenderer;
pub use lang_detection::{DetectError, Language, detect_dir_lang, language_by_name};
pub use render::{Dispatcher, Format, RenderError, RenderErrorKind, RenderReport, Renderer, sort_apis};
