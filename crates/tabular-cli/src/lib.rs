//! Library side of the `tabular` command-line tool.
//!
//! The binary parses [`cli::Cli`], sets up [`logging`] and calls [`run`].
//! Everything here is public so the pipeline can be tested without spawning
//! a process.

pub mod cli;
pub mod config;
pub mod load;
pub mod logging;
mod run;

pub use run::{run, transform};
