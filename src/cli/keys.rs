//! Key listing command.

use crate::cli::common::{to_json, CliResult};
use crate::music::{key_facts, Key};
use clap::Args;
use serde::Serialize;

/// List all twelve keys with their signature, relative minor and circle position
#[derive(Debug, Clone, Args)]
pub struct KeysArgs {
    /// Only list natural keys
    #[arg(long)]
    pub naturals: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct KeyRow {
    key: Key,
    key_signature: &'static str,
    relative_minor: &'static str,
    circle_position: &'static str,
}

impl KeysArgs {
    fn rows(&self) -> Vec<KeyRow> {
        Key::ALL
            .into_iter()
            .filter(|key| !self.naturals || key.is_natural())
            .map(|key| {
                let facts = key_facts(key);
                KeyRow {
                    key,
                    key_signature: facts.key_signature,
                    relative_minor: facts.relative_minor,
                    circle_position: facts.circle_position,
                }
            })
            .collect()
    }

    /// Execute the keys command
    pub fn execute(&self) -> CliResult<()> {
        let rows = self.rows();

        if self.json {
            println!("{}", to_json(&rows)?);
        } else {
            println!("{:<5}{:<10}{:<10}Circle", "Key", "Signature", "Minor");
            for row in &rows {
                println!(
                    "{:<5}{:<10}{:<10}{}",
                    row.key.name(),
                    row.key_signature,
                    row.relative_minor,
                    row.circle_position
                );
            }
        }

        Ok(())
    }
}
