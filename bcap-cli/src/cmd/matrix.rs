use bcap::{
    capability::CapabilityMatrix,
    error::{BoxError, ErrorContext as _},
};
use clap::Args;
use std::io::Write;

#[derive(Debug, Args)]
/// print the builtin capability matrix as json
///
/// The output can be edited and passed back using the `--matrix` flag
/// of the other commands.
pub struct CliCommandMatrix {
    #[arg(long, short = 'F')]
    /// only print the profile of this browser family
    family: Option<String>,
}

/// Run the matrix command, writing the builtin matrix (or one of its profiles) to the writer.
pub fn run(cfg: CliCommandMatrix, writer: impl Write) -> Result<(), BoxError> {
    let matrix = CapabilityMatrix::builtin();
    match cfg.family {
        None => super::write_json(writer, matrix.as_ref()),
        Some(family) => {
            let profile = matrix.profile(&family).with_context(|| {
                format!(
                    "unknown browser family '{family}', known families: {}",
                    matrix.families().collect::<Vec<_>>().join(", ")
                )
            })?;
            super::write_json(writer, profile)
        }
    }
}
