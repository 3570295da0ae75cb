//! Constant lookup tables for the diatonic chord family of each major key.
//!
//! Chord symbols are enumerated literally rather than derived from interval
//! math so that sharp and double-sharp spellings (`F##m` in D♯ major) are
//! reproduced exactly.

use serde::Serialize;

use super::key::Key;

/// Sentinel returned for facts about a name outside the twelve keys.
pub const UNKNOWN: &str = "Unknown";

/// Roman numerals for the seven scale degrees, in chord-family order.
pub const ROMAN_NUMERALS: [&str; 7] = ["I", "ii", "iii", "IV", "V", "vi", "vii°"];

/// Chord quality of each scale degree in a harmonized major scale.
pub const DEGREE_QUALITIES: [ChordQuality; 7] = [
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Minor,
    ChordQuality::Major,
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Diminished,
];

/// Degree indices of the vi - IV - I - V progression.
pub const POPULAR_PROGRESSION: [usize; 4] = [5, 3, 0, 4];

/// Seven chord symbols, one per scale degree.
pub type ChordFamily = [&'static str; 7];

/// Triad quality as encoded by the chord symbol suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    /// No suffix
    Major,
    /// `m` suffix
    Minor,
    /// `°` suffix
    Diminished,
}

impl ChordQuality {
    /// Reads the quality from a chord symbol such as `"F##m"` or `"B°"`.
    #[must_use]
    pub fn of_symbol(symbol: &str) -> Self {
        if symbol.ends_with('°') {
            Self::Diminished
        } else if symbol.ends_with('m') {
            Self::Minor
        } else {
            Self::Major
        }
    }
}

/// Pair of minor pentatonic root positions on the guitar neck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PentatonicPositions {
    /// Root on the low E string
    pub position1: &'static str,
    /// Root on the A string
    pub position2: &'static str,
}

impl PentatonicPositions {
    /// Positions reported for a name outside the key set.
    pub const UNKNOWN: Self = Self {
        position1: UNKNOWN,
        position2: UNKNOWN,
    };
}

/// Per-key derived attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyFacts {
    /// Number of sharps or flats, e.g. `"2 ♯"`
    pub key_signature: &'static str,
    /// Relative minor chord symbol, e.g. `"Bm"`
    pub relative_minor: &'static str,
    /// Clock position on the circle of fifths, e.g. `"2 o'clock"`
    pub circle_position: &'static str,
    /// Pentatonic starting positions
    pub pentatonic: PentatonicPositions,
}

impl KeyFacts {
    /// Facts reported for a name outside the key set.
    pub const UNKNOWN: Self = Self {
        key_signature: UNKNOWN,
        relative_minor: UNKNOWN,
        circle_position: UNKNOWN,
        pentatonic: PentatonicPositions::UNKNOWN,
    };
}

/// Chord family of `key` in degree order I through vii°.
#[must_use]
pub const fn chord_family(key: Key) -> ChordFamily {
    match key {
        Key::C => ["C", "Dm", "Em", "F", "G", "Am", "B°"],
        Key::CSharp => ["C#", "D#m", "E#m", "F#", "G#", "A#m", "B#°"],
        Key::D => ["D", "Em", "F#m", "G", "A", "Bm", "C#°"],
        Key::DSharp => ["D#", "E#m", "F##m", "G#", "A#", "B#m", "C##°"],
        Key::E => ["E", "F#m", "G#m", "A", "B", "C#m", "D#°"],
        Key::F => ["F", "Gm", "Am", "Bb", "C", "Dm", "E°"],
        Key::FSharp => ["F#", "G#m", "A#m", "B", "C#", "D#m", "E#°"],
        Key::G => ["G", "Am", "Bm", "C", "D", "Em", "F#°"],
        Key::GSharp => ["G#", "A#m", "B#m", "C#", "D#", "E#m", "F##°"],
        Key::A => ["A", "Bm", "C#m", "D", "E", "F#m", "G#°"],
        Key::ASharp => ["A#", "B#m", "C##m", "D#", "E#", "F##m", "G##°"],
        Key::B => ["B", "C#m", "D#m", "E", "F#", "G#m", "A#°"],
    }
}

/// Key signature label.
#[must_use]
pub const fn key_signature(key: Key) -> &'static str {
    match key {
        Key::C => "No ♯/♭",
        Key::CSharp => "7 ♯",
        Key::D => "2 ♯",
        Key::DSharp => "9 ♯",
        Key::E => "4 ♯",
        Key::F => "1 ♭",
        Key::FSharp => "6 ♯",
        Key::G => "1 ♯",
        Key::GSharp => "8 ♯",
        Key::A => "3 ♯",
        Key::ASharp => "10 ♯",
        Key::B => "5 ♯",
    }
}

/// Relative minor chord symbol (the vi chord).
#[must_use]
pub const fn relative_minor(key: Key) -> &'static str {
    match key {
        Key::C => "Am",
        Key::CSharp => "A#m",
        Key::D => "Bm",
        Key::DSharp => "B#m",
        Key::E => "C#m",
        Key::F => "Dm",
        Key::FSharp => "D#m",
        Key::G => "Em",
        Key::GSharp => "E#m",
        Key::A => "F#m",
        Key::ASharp => "F##m",
        Key::B => "G#m",
    }
}

/// Clock position on the circle of fifths, C at 12 o'clock.
#[must_use]
pub const fn circle_position(key: Key) -> &'static str {
    match key {
        Key::C => "12 o'clock",
        Key::G => "1 o'clock",
        Key::D => "2 o'clock",
        Key::A => "3 o'clock",
        Key::E => "4 o'clock",
        Key::B => "5 o'clock",
        Key::FSharp => "6 o'clock",
        Key::CSharp => "7 o'clock",
        Key::GSharp => "8 o'clock",
        Key::DSharp => "9 o'clock",
        Key::ASharp => "10 o'clock",
        Key::F => "11 o'clock",
    }
}

/// Minor pentatonic root positions on the E and A strings.
#[must_use]
pub const fn pentatonic_positions(key: Key) -> PentatonicPositions {
    let (position1, position2) = match key {
        Key::C => ("8th fret (E string)", "3rd fret (A string)"),
        Key::CSharp => ("9th fret (E string)", "4th fret (A string)"),
        Key::D => ("10th fret (E string)", "5th fret (A string)"),
        Key::DSharp => ("11th fret (E string)", "6th fret (A string)"),
        Key::E => ("12th fret (E string)", "7th fret (A string)"),
        Key::F => ("1st fret (E string)", "8th fret (A string)"),
        Key::FSharp => ("2nd fret (E string)", "9th fret (A string)"),
        Key::G => ("3rd fret (E string)", "10th fret (A string)"),
        Key::GSharp => ("4th fret (E string)", "11th fret (A string)"),
        Key::A => ("5th fret (E string)", "12th fret (A string)"),
        Key::ASharp => ("6th fret (E string)", "1st fret (A string)"),
        Key::B => ("7th fret (E string)", "2nd fret (A string)"),
    };
    PentatonicPositions {
        position1,
        position2,
    }
}

/// All derived facts for `key`.
#[must_use]
pub const fn key_facts(key: Key) -> KeyFacts {
    KeyFacts {
        key_signature: key_signature(key),
        relative_minor: relative_minor(key),
        circle_position: circle_position(key),
        pentatonic: pentatonic_positions(key),
    }
}

/// Facts for an untyped key name; [`KeyFacts::UNKNOWN`] unless the name is
/// exactly one of the twelve canonical names.
#[must_use]
pub fn key_facts_by_name(name: &str) -> KeyFacts {
    Key::from_name(name).map_or(KeyFacts::UNKNOWN, key_facts)
}

/// Chord family for an exact canonical key name.
#[must_use]
pub fn chord_family_by_name(name: &str) -> Option<ChordFamily> {
    Key::from_name(name).map(chord_family)
}

/// Chords of the vi - IV - I - V progression in `key`.
#[must_use]
pub fn popular_progression(key: Key) -> [&'static str; 4] {
    let family = chord_family(key);
    POPULAR_PROGRESSION.map(|degree| family[degree])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_has_seven_chords() {
        for key in Key::ALL {
            assert_eq!(chord_family(key).len(), 7, "{key}");
        }
    }

    #[test]
    fn test_quality_pattern_matches_major_harmonization() {
        for key in Key::ALL {
            let qualities = chord_family(key).map(ChordQuality::of_symbol);
            assert_eq!(qualities, DEGREE_QUALITIES, "quality pattern for {key}");
        }
    }

    #[test]
    fn test_tonic_is_key_name() {
        for key in Key::ALL {
            assert_eq!(chord_family(key)[0], key.name());
        }
    }

    #[test]
    fn test_double_sharp_spelling_preserved() {
        assert_eq!(chord_family(Key::DSharp)[2], "F##m");
        assert_eq!(chord_family(Key::DSharp)[6], "C##°");
        assert_eq!(chord_family(Key::ASharp)[2], "C##m");
        assert_eq!(chord_family(Key::GSharp)[6], "F##°");
    }

    #[test]
    fn test_key_signatures() {
        assert_eq!(key_signature(Key::C), "No ♯/♭");
        assert_eq!(key_signature(Key::F), "1 ♭");
        assert_eq!(key_signature(Key::GSharp), "8 ♯");
        assert_eq!(key_signature(Key::ASharp), "10 ♯");
    }

    #[test]
    fn test_relative_minor_is_sixth_degree() {
        assert_eq!(relative_minor(Key::C), "Am");
        assert_eq!(relative_minor(Key::DSharp), "B#m");
        for key in Key::ALL {
            assert_eq!(relative_minor(key), chord_family(key)[5], "{key}");
        }
    }

    #[test]
    fn test_circle_positions_are_distinct() {
        let mut positions: Vec<&str> = Key::ALL.iter().map(|k| circle_position(*k)).collect();
        positions.sort_unstable();
        positions.dedup();
        assert_eq!(positions.len(), 12);
        assert_eq!(circle_position(Key::C), "12 o'clock");
        assert_eq!(circle_position(Key::F), "11 o'clock");
    }

    #[test]
    fn test_pentatonic_positions() {
        let c = pentatonic_positions(Key::C);
        assert_eq!(c.position1, "8th fret (E string)");
        assert_eq!(c.position2, "3rd fret (A string)");

        let a_sharp = pentatonic_positions(Key::ASharp);
        assert_eq!(a_sharp.position2, "1st fret (A string)");
    }

    #[test]
    fn test_lookup_by_name() {
        let facts = key_facts_by_name("G");
        assert_eq!(facts, key_facts(Key::G));
        assert_eq!(chord_family_by_name("D#").map(|f| f[2]), Some("F##m"));
    }

    #[test]
    fn test_unknown_name_falls_back_to_sentinel() {
        let facts = key_facts_by_name("H#");
        assert_eq!(facts.key_signature, "Unknown");
        assert_eq!(facts.relative_minor, "Unknown");
        assert_eq!(facts.circle_position, "Unknown");
        assert_eq!(facts.pentatonic.position1, "Unknown");
        assert_eq!(facts.pentatonic.position2, "Unknown");
        assert_eq!(chord_family_by_name("H#"), None);
    }

    #[test]
    fn test_name_lookup_does_not_normalize() {
        for name in ["c", "c#", "C♯", " D "] {
            assert_eq!(key_facts_by_name(name), KeyFacts::UNKNOWN, "{name:?}");
            assert_eq!(chord_family_by_name(name), None, "{name:?}");
        }
    }

    #[test]
    fn test_popular_progression() {
        assert_eq!(popular_progression(Key::C), ["Am", "F", "C", "G"]);
        assert_eq!(popular_progression(Key::E), ["C#m", "A", "E", "B"]);
    }
}
