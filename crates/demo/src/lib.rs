// File: crates/demo/src/lib.rs
// Summary: Shared demo plumbing: CLI arguments, CSV series input and logging setup.

pub mod cli;
pub mod input;

pub use cli::RunArgs;

/// Install the fmt subscriber; `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
