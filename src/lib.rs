//! Chord Family Library
//!
//! Diatonic chord families, key signatures, relative minors, circle of
//! fifths positions and pentatonic root positions for the twelve major keys,
//! plus the key navigator and terminal front end built on them.

pub mod branding;
pub mod cli;
pub mod config;
pub mod logging;
pub mod music;
pub mod shortcuts;
pub mod tui;
