//! Chord family command.

use crate::cli::common::{to_json, CliError, CliResult};
use crate::music::{
    chord_family, key_facts, popular_progression, ChordQuality, Key, KeyFacts, ROMAN_NUMERALS,
};
use clap::Args;
use serde::Serialize;
use tracing::debug;

/// Print the chord family and key facts for one key
#[derive(Debug, Clone, Args)]
pub struct ChordsArgs {
    /// Key name (C, C#, D, D#, E, F, F#, G, G#, A, A#, B)
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ChordEntry {
    numeral: &'static str,
    chord: &'static str,
    quality: ChordQuality,
}

#[derive(Debug, Serialize)]
struct ChordsReport {
    key: Key,
    chords: Vec<ChordEntry>,
    #[serde(flatten)]
    facts: KeyFacts,
    progression: [&'static str; 4],
}

impl ChordsReport {
    fn new(key: Key) -> Self {
        let chords = ROMAN_NUMERALS
            .into_iter()
            .zip(chord_family(key))
            .map(|(numeral, chord)| ChordEntry {
                numeral,
                chord,
                quality: ChordQuality::of_symbol(chord),
            })
            .collect();

        Self {
            key,
            chords,
            facts: key_facts(key),
            progression: popular_progression(key),
        }
    }
}

impl ChordsArgs {
    /// Execute the chords command
    pub fn execute(&self) -> CliResult<()> {
        let key = self
            .key
            .parse::<Key>()
            .map_err(|e| CliError::validation(e.to_string()))?;
        debug!("Printing chord family for {key}");

        let report = ChordsReport::new(key);

        if self.json {
            println!("{}", to_json(&report)?);
        } else {
            println!("{} Major", report.key);
            for entry in &report.chords {
                println!("  {:<6}{}", entry.numeral, entry.chord);
            }
            println!();
            println!("Key Signature:   {}", report.facts.key_signature);
            println!("Relative Minor:  {}", report.facts.relative_minor);
            println!("Circle Position: {}", report.facts.circle_position);
            println!("Pentatonic 1:    {}", report.facts.pentatonic.position1);
            println!("Pentatonic 2:    {}", report.facts.pentatonic.position2);
            println!(
                "Progression:     {} (vi - IV - I - V)",
                report.progression.join(" → ")
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_pairs_numerals_with_chords() {
        let report = ChordsReport::new(Key::DSharp);
        assert_eq!(report.chords.len(), 7);
        assert_eq!(report.chords[2].numeral, "iii");
        assert_eq!(report.chords[2].chord, "F##m");
        assert_eq!(report.chords[6].quality, ChordQuality::Diminished);
    }

    #[test]
    fn test_report_json_shape() {
        let json = serde_json::to_value(ChordsReport::new(Key::F)).unwrap();
        assert_eq!(json["key"], "F");
        assert_eq!(json["key_signature"], "1 ♭");
        assert_eq!(json["chords"][3]["chord"], "Bb");
        assert_eq!(json["chords"][3]["quality"], "major");
        assert_eq!(json["pentatonic"]["position1"], "1st fret (E string)");
        assert_eq!(json["progression"][0], "Dm");
    }

    #[test]
    fn test_unknown_key_is_validation_error() {
        let args = ChordsArgs {
            key: "Cb".to_string(),
            json: false,
        };
        let err = args.execute().unwrap_err();
        assert_eq!(err.exit_code, crate::cli::ExitCode::ValidationError);
        assert!(err.message.contains("Unknown key 'Cb'"));
    }
}
