//! Logging setup.

use tracing_subscriber::{
    EnvFilter, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Filter directive for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr `fmt` subscriber at the level chosen by `verbosity`.
///
/// Does nothing if a global subscriber is already set.
pub fn init(verbosity: u8) {
    install(verbosity, std::io::stderr, true);
}

/// Like [`init`], but write plain (uncoloured) lines to `writer`.
pub fn init_with_writer<W>(verbosity: u8, writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    install(verbosity, writer, false);
}

fn install<W>(verbosity: u8, writer: W, ansi: bool)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level_for(verbosity)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(writer),
        )
        .try_init();
}
