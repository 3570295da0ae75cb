//! Branding and application identity.
//!
//! Names and paths used across the TUI, CLI help and config locations live
//! here so they stay consistent.

/// The human-readable display name of the application.
pub const APP_DISPLAY_NAME: &str = "Chord Family";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "chordfamily";

/// The directory name for application data (config and log file).
///
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "ChordFamily";

/// Short description for help text.
pub const APP_DESCRIPTION: &str = "Diatonic chord families for all twelve major keys";

/// Environment variable consulted for the log filter before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "CHORDFAMILY_LOG";

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "chordfamily.log";
