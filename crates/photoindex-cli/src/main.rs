//! # photoindex CLI
//!
//! A terminal host for the photoindex catalog. The binary is intentionally
//! thin: `src/cli/` owns argument parsing, the terminal collaborators, and
//! rendering, while everything from `PhotoApi` inward lives in the library.
//!
//! ## Collaborators
//!
//! The library asks two things of its host:
//!
//! - **Capture source**: here, a file path argument or piped stdin. Running
//!   `photoindex capture` at an interactive terminal with no file is treated as
//!   the user backing out of the picker.
//! - **Confirmation gate**: a `[y/N]` prompt on stderr before every delete,
//!   skipped with `--yes`.
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `tracing-subscriber`. The filter comes
//! from `PHOTOINDEX_LOG` (e.g. `PHOTOINDEX_LOG=photoindex=debug`), defaults to
//! `warn`, and `-v` raises it to `debug`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
