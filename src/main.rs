//! apidoc - command-line entry point.
//!
//! # Usage
//!
//! ```text
//! apidoc init   [CONFIG]          write a default apidoc.json
//! apidoc check  [CONFIG]          load and validate a configuration
//! apidoc render MODEL [CONFIG]    render a parsed documentation model (JSON)
//! ```
//!
//! `CONFIG` defaults to `./apidoc.json`. Set `APIDOC_DEBUG=1` for debug
//! logging and `APIDOC_LOG_DIR` to also log to a rotating file.
//!
//! Comment parsing and the HTML renderers live outside this crate, so `render`
//! takes an already-parsed model and only the JSON output is bound here.

use anyhow::{Context, Result, bail};
use apidoc::{APP_NAME, CONFIG_FILENAME, Diagnostics, Dispatcher, Doc, VERSION};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

fn main() -> Result<()> {
    let debug_mode = std::env::var("APIDOC_DEBUG").is_ok_and(|v| v == "1");
    let log_dir = std::env::var("APIDOC_LOG_DIR").ok().map(Utf8PathBuf::from);
    let _guard = apidoc::logging::setup_logging(debug_mode, log_dir.as_deref())?;

    tracing::debug!("Starting {} v{}", APP_NAME, VERSION);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let diagnostics = Diagnostics::console();

    match args.first().map(String::as_str) {
        Some("init") => {
            let path = config_path(args.get(1));
            apidoc::generate_config(&path, &diagnostics)?;
            println!("Wrote {}", path);
        }
        Some("check") => {
            let path = config_path(args.get(1));
            let config = apidoc::load_config(&path, &diagnostics)?;
            println!("{} is valid ({} inputs)", path, config.inputs.len());
        }
        Some("render") => {
            let Some(model) = args.get(1) else {
                bail!("usage: {} render MODEL [CONFIG]", APP_NAME);
            };
            let path = config_path(args.get(2));
            render(Utf8Path::new(model), &path, &diagnostics)?;
        }
        Some("version") | Some("--version") => println!("{} {}", APP_NAME, VERSION),
        _ => bail!("usage: {} <init|check|render|version> [ARGS]", APP_NAME),
    }

    Ok(())
}

fn config_path(arg: Option<&String>) -> Utf8PathBuf {
    arg.map(Utf8PathBuf::from)
        .unwrap_or_else(|| Utf8PathBuf::from(CONFIG_FILENAME))
}

fn render(model: &Utf8Path, config_path: &Utf8Path, diagnostics: &Diagnostics) -> Result<()> {
    let config = apidoc::load_config(config_path, diagnostics)?;
    let output = config
        .output()
        .context("configuration has no output")?;

    let data = fs::read(model).with_context(|| format!("Failed to read model: {}", model))?;
    let mut doc: Doc =
        serde_json::from_slice(&data).with_context(|| format!("Failed to parse model: {}", model))?;

    let report = Dispatcher::new().render(&mut doc, output, diagnostics)?;
    println!("Rendered {} apis as {} in {:?}", doc.apis.len(), report.format, report.elapsed);

    Ok(())
}
