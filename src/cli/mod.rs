//! CLI command handlers.
//!
//! Headless, scriptable access to the chord catalog.

pub mod chords;
pub mod common;
pub mod config;
pub mod keys;

// Re-export types used by main.rs and tests
pub use chords::ChordsArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::{ConfigArgs, ConfigCommand};
pub use keys::KeysArgs;
