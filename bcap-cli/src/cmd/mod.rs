//! bcap cli commands

pub mod choose;
pub mod detect;
pub mod matrix;

use bcap::{
    capability::{CapabilityDetector, CapabilityMatrix},
    error::{BoxError, ErrorContext as _},
};
use serde::Serialize;
use std::{io::Write, path::Path};

/// Create a detector using the builtin matrix,
/// or the matrix found in the given JSON file.
fn load_detector(matrix: Option<&Path>) -> Result<CapabilityDetector, BoxError> {
    let detector = CapabilityDetector::new();
    let Some(path) = matrix else {
        return Ok(detector);
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read capability matrix file '{}'", path.display()))?;
    let matrix = CapabilityMatrix::from_json_str(&json)?;
    bcap::telemetry::tracing::debug!(
        matrix.path = %path.display(),
        "loaded capability matrix for families: {:?}",
        matrix.families().collect::<Vec<_>>(),
    );
    Ok(detector.with_matrix(matrix))
}

/// Write the value as pretty JSON followed by a newline.
fn write_json(mut writer: impl Write, value: &impl Serialize) -> Result<(), BoxError> {
    serde_json::to_writer_pretty(&mut writer, value).context("write output as json")?;
    writeln!(writer).context("write trailing newline")?;
    writer.flush().context("flush output")?;
    Ok(())
}
