//! Tracing setup for the demo shell.
//!
//! Stderr logging filtered by `RUST_LOG` (default `warn`). Setting
//! `SHRIKE_LOG=1` additionally appends structured lines to
//! `$XDG_STATE_HOME/shrike/shell.log` (falling back to `~/.local/state`).
//! Keep the returned guard alive until exit so buffered lines are flushed.

use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[must_use]
pub struct LogGuard(Option<tracing_appender::non_blocking::WorkerGuard>);

pub fn init() -> LogGuard {
    let file_logging = std::env::var("SHRIKE_LOG").as_deref() == Ok("1");
    let default = if file_logging { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let stderr = fmt::layer().with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter).with(stderr);

    if !file_logging {
        registry.init();
        return LogGuard(None);
    }

    let dir = state_dir();
    let _ = std::fs::create_dir_all(&dir);
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, "shell.log"));
    registry
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();
    LogGuard(Some(guard))
}

fn state_dir() -> PathBuf {
    let mut p = std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut home = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".into()));
            home.push(".local");
            home.push("state");
            home
        });
    p.push("shrike");
    p
}
