//! entrypoint for bcap-cli

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use bcap::{
    error::{ErrorExt as _, OpaqueError},
    telemetry::tracing::{self, level_filters::LevelFilter},
};
use clap::{Parser, Subcommand};

pub mod cmd;
use self::cmd::{choose, detect, matrix};

pub mod trace;

#[derive(Debug, Parser)]
#[command(name = "bcap")]
#[command(bin_name = "bcap")]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(long, global = true)]
    /// log as json (one flattened event per line) instead of human readable text
    ///
    /// Logs are written to stderr and filtered using the `RUST_LOG` env variable
    /// (default: warn).
    log_json: bool,

    #[command(subcommand)]
    cmds: CliCommands,
}

#[derive(Debug, Subcommand)]
enum CliCommands {
    Detect(detect::CliCommandDetect),
    Choose(choose::CliCommandChoose),
    Matrix(matrix::CliCommandMatrix),
}

fn main() {
    let cli = Cli::parse();

    let result = trace::init_tracing(LevelFilter::WARN, cli.log_json).and_then(|()| {
        let mut stdout = std::io::stdout().lock();
        match cli.cmds {
            CliCommands::Detect(cfg) => detect::run(cfg, &mut stdout),
            CliCommands::Choose(cfg) => choose::run(cfg, &mut stdout),
            CliCommands::Matrix(cfg) => matrix::run(cfg, &mut stdout),
        }
    });

    #[allow(clippy::exit)]
    if let Err(err) = result {
        let err = OpaqueError::from(err);
        tracing::debug!(
            error.chain.len = err.chain().count(),
            "command failed, root cause: {:?}",
            err.root_cause(),
        );
        eprintln!("🚩 exit with error: {err}");
        std::process::exit(1);
    }
}
