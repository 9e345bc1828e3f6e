//! Diagnostics on stderr.
//!
//! The scaffold emits one event per directory and file it touches
//! (`provkit_core`), plus template reads (`provkit_adapters`).  These stay
//! hidden unless asked for: a plain run prints only warnings, so the report
//! on stdout is the whole story.
//!
//! `-q` narrows to errors, each `-v` widens one step (INFO shows the
//! per-file events, DEBUG the template paths and the failing error's
//! category, TRACE everything).  A set `RUST_LOG` replaces the computed
//! filter entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events are shown under the computed filter.
const TARGETS: [&str; 3] = ["provkit", "provkit_core", "provkit_adapters"];

/// Install the stderr subscriber.  Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => filter_for(verbosity(args)),
    };

    let events = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(events)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

fn verbosity(args: &GlobalArgs) -> LevelFilter {
    match (args.quiet, args.verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

/// `provkit=<lvl>,provkit_core=<lvl>,...`; anything else stays off.
fn filter_for(level: LevelFilter) -> EnvFilter {
    let directives = TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::new(directives)
}
