//! Sol command-line front end.
//!
//! The binary is a thin argument dispatcher; the commands live here so the
//! REPL loop and the diagnostics can be tested against in-memory I/O.

pub mod commands;
pub mod diagnostic;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable overriding the interpreter's call depth limit.
pub const MAX_CALL_DEPTH_VAR: &str = "SOL_MAX_CALL_DEPTH";

/// Initialize tracing for debug output.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=sol_eval=trace`.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .init();
        }
    });
}
