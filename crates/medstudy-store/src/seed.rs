//! Built-in discipline seed data.
//!
//! A seed file is a JSON array using the stored discipline shape. `id` and
//! `isCustom` may be omitted:
//!
//! ```json
//! [
//!   { "nome": "Cardiology", "assuntos": ["Arrhythmias", "Heart failure"] },
//!   { "id": 20, "nome": "Pharmacology", "assuntos": [] }
//! ]
//! ```

use std::collections::HashSet;
use std::path::Path;

use medstudy_core::entities::Discipline;
use medstudy_core::ids::DEFAULT_TOPIC;
use serde::Deserialize;

use crate::error::StoreError;

#[derive(Debug, Deserialize)]
struct SeedEntry {
    #[serde(default)]
    id: Option<i64>,
    nome: String,
    #[serde(default)]
    assuntos: Vec<String>,
}

/// Read built-in disciplines from a seed file.
///
/// Entries without an `id` get their 1-based position in the file.
///
/// # Errors
///
/// Returns `StoreError::Seed` if the file cannot be read or is not a JSON
/// array of discipline entries.
pub fn load_seed_file(path: &Path) -> Result<Vec<Discipline>, StoreError> {
    let seed_err = |reason: String| StoreError::Seed {
        path: path.to_path_buf(),
        reason,
    };

    let raw = std::fs::read_to_string(path).map_err(|e| seed_err(e.to_string()))?;
    let entries: Vec<SeedEntry> = serde_json::from_str(&raw).map_err(|e| seed_err(e.to_string()))?;

    Ok(entries
        .into_iter()
        .zip(1_i64..)
        .map(|(entry, position)| Discipline {
            id: entry.id.unwrap_or(position),
            name: entry.nome,
            topics: entry.assuntos,
            is_custom: false,
        })
        .collect())
}

/// Bring seed disciplines in line with the document invariants.
///
/// Names and topics are trimmed, blank topics dropped, and an empty topic list
/// replaced with [`DEFAULT_TOPIC`]. Entries are skipped with a warning when the
/// name is blank, or when the name (ignoring case) or the id is already taken
/// by an earlier seed entry or by one of the `existing` disciplines.
#[must_use]
pub fn normalize_seed(seed: Vec<Discipline>, existing: &[Discipline]) -> Vec<Discipline> {
    let mut seen_names: HashSet<String> =
        existing.iter().map(|d| d.name.to_lowercase()).collect();
    let mut seen_ids: HashSet<i64> = existing.iter().map(|d| d.id).collect();
    let mut out = Vec::with_capacity(seed.len());

    for discipline in seed {
        let name = discipline.name.trim().to_string();
        if name.is_empty() {
            tracing::warn!(id = discipline.id, "skipping seed discipline with empty name");
            continue;
        }
        if seen_names.contains(&name.to_lowercase()) {
            tracing::warn!(%name, "skipping seed discipline with a name already in use");
            continue;
        }
        if !seen_ids.insert(discipline.id) {
            tracing::warn!(
                id = discipline.id,
                %name,
                "skipping seed discipline with an id already in use"
            );
            continue;
        }
        seen_names.insert(name.to_lowercase());

        let mut topics: Vec<String> = discipline
            .topics
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();
        if topics.is_empty() {
            topics.push(DEFAULT_TOPIC.to_string());
        }

        out.push(Discipline {
            id: discipline.id,
            name,
            topics,
            is_custom: false,
        });
    }

    out
}
