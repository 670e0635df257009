use super::{load_detector, write_json};
use bcap::{
    build::{BuildSelection, Manifest},
    error::{BoxError, ErrorContext as _, OpaqueError},
    telemetry::tracing,
};
use clap::Args;
use http::Uri;
use serde::Serialize;
use std::{io::Write, path::PathBuf};

#[derive(Debug, Args)]
/// choose the most capable build (of a polymer.json manifest) a browser can run
pub struct CliCommandChoose {
    #[arg(long, short = 'f', default_value = "polymer.json")]
    /// build manifest (json) listing the builds and their required capabilities
    manifest: PathBuf,

    #[arg(long, short = 'u')]
    /// User-Agent (header) value of the client
    user_agent: String,

    #[arg(long, short = 'l')]
    /// current (absolute) location of the client,
    /// used to also output the full redirect location
    location: Option<Uri>,

    #[arg(long, short = 'm')]
    /// capability matrix (json) file to use instead of the builtin one
    matrix: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Choice {
    #[serde(flatten)]
    selection: BuildSelection,
    location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect: Option<String>,
}

/// Run the choose command, writing the chosen build as JSON to the writer.
///
/// Fails when no build of the manifest can be served to the client.
pub fn run(cfg: CliCommandChoose, writer: impl Write) -> Result<(), BoxError> {
    let detector = load_detector(cfg.matrix.as_deref())?;

    let manifest = std::fs::read(&cfg.manifest)
        .with_context(|| format!("read build manifest file '{}'", cfg.manifest.display()))?;
    let manifest = Manifest::from_json_slice(&manifest)?;

    let capabilities = detector.browser_capabilities(&cfg.user_agent);
    let selection = manifest.choose(&capabilities).ok_or_else(|| {
        OpaqueError::from_display(format!(
            "no build matches the client capabilities [{capabilities}]"
        ))
    })?;
    tracing::info!(
        build.name = %selection.name,
        manifest.path = %cfg.manifest.display(),
        "build chosen for user agent: {}",
        cfg.user_agent,
    );

    let redirect = cfg
        .location
        .as_ref()
        .map(|current| selection.redirect_uri(current))
        .transpose()?
        .map(|uri| uri.to_string());

    write_json(
        writer,
        &Choice {
            location: selection.location_path(),
            selection,
            redirect,
        },
    )
}
