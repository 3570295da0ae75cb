//! Music theory core: the key set, its lookup tables, and key navigation.

pub mod catalog;
pub mod key;
pub mod navigator;

pub use catalog::{
    chord_family, chord_family_by_name, key_facts, key_facts_by_name, popular_progression,
    ChordFamily, ChordQuality, KeyFacts, PentatonicPositions, ROMAN_NUMERALS,
};
pub use key::{Key, UnknownKeyError, KEY_COUNT};
pub use navigator::Navigator;
