use bcap::{
    error::{BoxError, ErrorContext as _},
    telemetry::tracing::subscriber::{
        self, EnvFilter, filter::Directive, fmt, layer::SubscriberExt, util::SubscriberInitExt,
    },
};

use std::io::IsTerminal as _;

/// Initialise the global tracing subscriber, writing to stderr.
///
/// The `RUST_LOG` env variable takes precedence over the default directive.
pub fn init_tracing(default_directive: impl Into<Directive>, json: bool) -> Result<(), BoxError> {
    let filter = EnvFilter::builder()
        .with_default_directive(default_directive.into())
        .from_env_lossy();

    if json {
        subscriber::registry()
            .with(
                fmt::Layer::new()
                    .with_ansi(false)
                    .with_writer(std::io::stderr)
                    .json()
                    .flatten_event(true),
            )
            .with(filter)
            .try_init()
            .context("try init (structured) tracing subscriber")?;
    } else {
        subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init()
            .context("try init (default) tracing subscriber")?;
    }

    Ok(())
}
