//! Manifest generator binary.
//!
//! Reads a build-input document (`{ hooks, injections, chunks, options }`)
//! and writes the finalized manifest as indented JSON.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `MANIFEST_INPUT`: path of the build-input JSON (default: stdin)
//! - `MANIFEST_OUTPUT`: path to write the manifest to (default: stdout)
//! - `RUST_LOG`: Log level filter (default: info)
//! - `LOG_FORMAT`: "json" for structured logs, "pretty" for development (default: pretty)
//!
//! ## Usage
//!
//! ```bash
//! MANIFEST_INPUT=dist/build-input.json MANIFEST_OUTPUT=dist/q-manifest.json \
//!     cargo run --bin lazy-manifest --features cli
//! ```

use std::io::{Read, Write};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lazy_manifest::{BuildInput, ManifestError};

/// Initialize the tracing subscriber on stderr with JSON or pretty format
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "lazy_manifest=info".into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .flatten_event(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .init();
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

fn read_input() -> Result<String, CliError> {
    if let Ok(path) = std::env::var("MANIFEST_INPUT") {
        return std::fs::read_to_string(&path).map_err(|source| CliError::Io { path, source });
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|source| CliError::Io {
            path: "<stdin>".to_string(),
            source,
        })?;
    Ok(text)
}

fn write_output(json: &str) -> Result<(), CliError> {
    match std::env::var("MANIFEST_OUTPUT") {
        Ok(path) => std::fs::write(&path, json).map_err(|source| CliError::Io { path, source }),
        Err(_) => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .and_then(|_| stdout.write_all(b"\n"))
                .map_err(|source| CliError::Io {
                    path: "<stdout>".to_string(),
                    source,
                })
        }
    }
}

fn run() -> Result<(), CliError> {
    let text = read_input()?;
    let input: BuildInput = serde_json::from_str(&text).map_err(ManifestError::from)?;

    let manifest = input.build()?;
    let manifest_hash = manifest.manifest_hash()?;

    info!(
        hooks = input.hooks.len(),
        chunks = input.chunks.len(),
        symbols = manifest.symbols.len(),
        bundles = manifest.bundles.len(),
        manifest_hash = %manifest_hash,
        "Manifest generated"
    );

    write_output(&manifest.to_json_pretty()?)
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Manifest generation failed");
            ExitCode::FAILURE
        }
    }
}
