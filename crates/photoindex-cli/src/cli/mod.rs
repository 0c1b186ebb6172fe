//! # CLI Layer
//!
//! This module is **one possible UI client** for photoindex. It is the only
//! place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Dispatch from parsed arguments to the API
//! - `capture`: File and stdin capture sources
//! - `gate`: Terminal confirmation prompt
//! - `render`: Output formatting (list, messages, JSON)
//! - `logging`: tracing subscriber setup

mod capture;
mod commands;
mod gate;
mod logging;
mod render;
pub mod setup;

pub use commands::run;
