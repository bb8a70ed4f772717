//! Render dispatch.
//!
//! [`Dispatcher::render`] puts the documentation model into its canonical
//! order and hands it to the renderer bound to the output's format. It never
//! renders anything itself.

use crate::diagnostics::Diagnostics;
use crate::models::{Doc, OutputOptions};
use std::fmt;
use std::io;
use std::str::FromStr;
use std::time::{Duration, Instant};
use thiserror::Error;

use super::json::JsonRenderer;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Static HTML pages
    Html,
    /// HTML preview; diagnostics go to the error log instead of aborting
    HtmlPlus,
    /// The documentation model as JSON
    Json,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::HtmlPlus => "html+",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Format::Html),
            "html+" => Ok(Format::HtmlPlus),
            "json" => Ok(Format::Json),
            other => Err(RenderError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Errors from render dispatch or from the renderer it delegates to
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unsupported output type: {0:?}")]
    UnsupportedFormat(String),

    #[error("No renderer bound for output type {0}")]
    MissingRenderer(Format),

    #[error("Render I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize documentation: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Render failed: {0}")]
    Failed(String),
}

/// Coarse classification of a [`RenderError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderErrorKind {
    UnsupportedFormat,
    MissingRenderer,
    Renderer,
}

impl RenderError {
    pub fn kind(&self) -> RenderErrorKind {
        match self {
            RenderError::UnsupportedFormat(_) => RenderErrorKind::UnsupportedFormat,
            RenderError::MissingRenderer(_) => RenderErrorKind::MissingRenderer,
            RenderError::Io(_) | RenderError::Json(_) | RenderError::Failed(_) => {
                RenderErrorKind::Renderer
            }
        }
    }
}

/// A format-specific renderer.
///
/// Implementations must return once rendering is done; an interactive `html+`
/// renderer reports problems through `error_log` rather than failing.
#[cfg_attr(test, mockall::automock)]
pub trait Renderer {
    fn render(
        &self,
        doc: &Doc,
        output: &OutputOptions,
        error_log: &Diagnostics,
    ) -> Result<(), RenderError>;
}

/// Outcome of a successful render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderReport {
    pub format: Format,
    pub elapsed: Duration,
}

/// Routes a documentation model to the renderer for its output format.
///
/// JSON is bound to [`JsonRenderer`] out of the box. The HTML renderers live
/// outside this crate and are bound with [`with_html`](Self::with_html) and
/// [`with_html_plus`](Self::with_html_plus).
pub struct Dispatcher {
    html: Option<Box<dyn Renderer>>,
    html_plus: Option<Box<dyn Renderer>>,
    json: Box<dyn Renderer>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            html: None,
            html_plus: None,
            json: Box::new(JsonRenderer),
        }
    }

    pub fn with_html(mut self, renderer: impl Renderer + 'static) -> Self {
        self.html = Some(Box::new(renderer));
        self
    }

    pub fn with_html_plus(mut self, renderer: impl Renderer + 'static) -> Self {
        self.html_plus = Some(Box::new(renderer));
        self
    }

    pub fn with_json(mut self, renderer: impl Renderer + 'static) -> Self {
        self.json = Box::new(renderer);
        self
    }

    fn renderer_for(&self, format: Format) -> Option<&dyn Renderer> {
        match format {
            Format::Html => self.html.as_deref(),
            Format::HtmlPlus => self.html_plus.as_deref(),
            Format::Json => Some(self.json.as_ref()),
        }
    }

    /// Sort `doc` canonically, then render it with the renderer for
    /// `output.kind`.
    ///
    /// `output` must already have passed [`OutputOptions::init`]. Errors from
    /// the renderer are returned as-is.
    pub fn render(
        &self,
        doc: &mut Doc,
        output: &OutputOptions,
        error_log: &Diagnostics,
    ) -> Result<RenderReport, RenderError> {
        sort_apis(doc);

        let format: Format = output.kind.parse()?;
        let renderer = self
            .renderer_for(format)
            .ok_or(RenderError::MissingRenderer(format))?;

        let start = Instant::now();
        renderer.render(doc, output, error_log)?;
        let elapsed = start.elapsed();

        tracing::info!(
            "Rendered {} apis as {} into {} in {:?}",
            doc.apis.len(),
            format,
            output.dir,
            elapsed
        );

        Ok(RenderReport { format, elapsed })
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable sort of the model's APIs by URL.
///
/// APIs sharing a URL keep their relative order, so rendering an unchanged
/// model always produces the same output.
pub fn sort_apis(doc: &mut Doc) {
    doc.apis.sort_by(|a, b| a.url.cmp(&b.url));
}
