//! Ensayador: command-line interface for the Ensayo suite
//!
//! ## Usage
//!
//! ```bash
//! ensayador run --mock              # Run against the scripted app
//! ensayador run --tag regression    # Run only tagged cases
//! ensayador run -f user.json        # Run with fixture credentials
//! ensayador list                    # List cases and tags
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod commands;
pub mod error;
pub mod output;
pub mod run;

pub use commands::{Cli, Commands, RunArgs};
pub use error::{CliError, CliResult};
