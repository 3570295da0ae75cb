//! The twelve major keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of keys in the navigation cycle.
pub const KEY_COUNT: usize = 12;

/// A major key, ordered by semitone ascent from C.
///
/// The order of the variants is the navigation order; it is not the circle
/// of fifths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    /// C major
    #[serde(rename = "C")]
    C,
    /// C♯ major
    #[serde(rename = "C#")]
    CSharp,
    /// D major
    #[serde(rename = "D")]
    D,
    /// D♯ major
    #[serde(rename = "D#")]
    DSharp,
    /// E major
    #[serde(rename = "E")]
    E,
    /// F major
    #[serde(rename = "F")]
    F,
    /// F♯ major
    #[serde(rename = "F#")]
    FSharp,
    /// G major
    #[serde(rename = "G")]
    G,
    /// G♯ major
    #[serde(rename = "G#")]
    GSharp,
    /// A major
    #[serde(rename = "A")]
    A,
    /// A♯ major
    #[serde(rename = "A#")]
    ASharp,
    /// B major
    #[serde(rename = "B")]
    B,
}

impl Key {
    /// All keys in navigation order.
    pub const ALL: [Self; KEY_COUNT] = [
        Self::C,
        Self::CSharp,
        Self::D,
        Self::DSharp,
        Self::E,
        Self::F,
        Self::FSharp,
        Self::G,
        Self::GSharp,
        Self::A,
        Self::ASharp,
        Self::B,
    ];

    /// Position of this key in [`Key::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Key at `index`, wrapping modulo 12.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % KEY_COUNT]
    }

    /// Canonical name as displayed (e.g. "C", "F#").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::CSharp => "C#",
            Self::D => "D",
            Self::DSharp => "D#",
            Self::E => "E",
            Self::F => "F",
            Self::FSharp => "F#",
            Self::G => "G",
            Self::GSharp => "G#",
            Self::A => "A",
            Self::ASharp => "A#",
            Self::B => "B",
        }
    }

    /// Key whose canonical name is exactly `name`; no trimming or case folding.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    /// True when the key name carries no sharp.
    #[must_use]
    pub fn is_natural(self) -> bool {
        !self.name().contains('#')
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name one of the twelve keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKeyError(pub String);

impl fmt::Display for UnknownKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown key '{}' (expected one of: C, C#, D, D#, E, F, F#, G, G#, A, A#, B)",
            self.0
        )
    }
}

impl std::error::Error for UnknownKeyError {}

impl FromStr for Key {
    type Err = UnknownKeyError;

    /// Parses a canonical key name. The letter is case-insensitive and the
    /// sharp may be written as `#` or `♯`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.replace('♯', "#").to_uppercase();

        Self::ALL
            .into_iter()
            .find(|key| key.name() == normalized)
            .ok_or_else(|| UnknownKeyError(trimmed.to_string()))
    }
}
