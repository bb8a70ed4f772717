use super::render::{RenderError, Renderer};
use crate::diagnostics::Diagnostics;
use crate::models::{Doc, OutputOptions};
use std::fs;

/// File name the JSON renderer writes inside the output directory
pub const JSON_FILENAME: &str = "doc.json";

/// Writes the documentation model as indented JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(
        &self,
        doc: &Doc,
        output: &OutputOptions,
        _error_log: &Diagnostics,
    ) -> Result<(), RenderError> {
        let data = serde_json::to_vec_pretty(doc)?;
        let path = output.dir.join(JSON_FILENAME);
        fs::write(&path, data)?;

        tracing::debug!("Wrote {}", path);
        Ok(())
    }
}
