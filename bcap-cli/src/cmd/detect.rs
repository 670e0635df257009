use super::{load_detector, write_json};
use bcap::{capability::ClientCapabilitySet, error::BoxError, ua::BrowserSignature};
use clap::Args;
use serde::Serialize;
use std::{io::Write, path::PathBuf};

#[derive(Debug, Args)]
/// detect the capabilities of a browser from its User-Agent
pub struct CliCommandDetect {
    /// User-Agent (header) value of the client
    user_agent: String,

    #[arg(long, short = 'm')]
    /// capability matrix (json) file to use instead of the builtin one
    matrix: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Detection<'a> {
    user_agent: &'a str,
    #[serde(flatten)]
    signature: BrowserSignature,
    capabilities: ClientCapabilitySet,
}

/// Run the detect command, writing the detection as JSON to the writer.
///
/// The reported signature is the one evaluated against the matrix,
/// so Chrome on iOS is reported as Mobile Safari.
pub fn run(cfg: CliCommandDetect, writer: impl Write) -> Result<(), BoxError> {
    let detector = load_detector(cfg.matrix.as_deref())?;

    let signature = detector.signature(&cfg.user_agent);
    let capabilities = detector.signature_capabilities(&signature);

    write_json(
        writer,
        &Detection {
            user_agent: &cfg.user_agent,
            signature,
            capabilities,
        },
    )
}
