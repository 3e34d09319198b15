use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::reference::{Confederation, ReferenceData, ReferenceDataBuilder};

#[derive(Debug, Deserialize)]
struct CacheEntry {
    #[serde(default)]
    confederation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RankingRow {
    rank_date: String,
    country_full: String,
    confederation: String,
}

/// Builds reference data from a ranking file, or the embedded snapshot when
/// `path` is `None`. The static historical, additional and alias tables are
/// always layered on top.
pub fn load_reference(path: Option<&Path>) -> Result<ReferenceData> {
    let Some(path) = path else {
        return Ok(ReferenceData::builtin().clone());
    };
    let rankings = load_rankings(path)?;
    if rankings.is_empty() {
        return Err(anyhow!("ranking source {} has no usable rows", path.display()));
    }
    debug!(path = %path.display(), teams = rankings.len(), "loaded ranking source");
    Ok(ReferenceDataBuilder::with_static_tables()
        .rankings(rankings)
        .build())
}

pub fn load_rankings(path: &Path) -> Result<Vec<(String, Confederation)>> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        load_rankings_csv(path)
    } else {
        load_rankings_json(path)
    }
}

/// `{ "<team>": { "confederation": "UEFA", ... }, ... }`
pub fn load_rankings_json(path: &Path) -> Result<Vec<(String, Confederation)>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read ranking cache {}", path.display()))?;
    parse_rankings_json(&raw)
}

pub fn parse_rankings_json(raw: &str) -> Result<Vec<(String, Confederation)>> {
    let entries = serde_json::from_str::<BTreeMap<String, CacheEntry>>(raw.trim())
        .context("invalid ranking cache json")?;
    Ok(entries
        .into_iter()
        .filter_map(|(team, entry)| {
            let code = entry.confederation?;
            with_known_confederation(team, &code)
        })
        .collect())
}

/// FIFA ranking export; only rows from the latest `rank_date` are kept.
pub fn load_rankings_csv(path: &Path) -> Result<Vec<(String, Confederation)>> {
    let file = fs::File::open(path)
        .with_context(|| format!("open ranking csv {}", path.display()))?;
    parse_rankings_csv(file)
}

pub fn parse_rankings_csv<R: std::io::Read>(reader: R) -> Result<Vec<(String, Confederation)>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for row in rdr.deserialize::<RankingRow>() {
        rows.push(row.context("decode ranking row")?);
    }
    let Some(latest) = rows.iter().map(|r| r.rank_date.clone()).max() else {
        return Ok(Vec::new());
    };
    Ok(rows
        .into_iter()
        .filter(|row| row.rank_date == latest)
        .filter_map(|row| with_known_confederation(row.country_full, &row.confederation))
        .collect())
}

fn with_known_confederation(team: String, code: &str) -> Option<(String, Confederation)> {
    match Confederation::parse(code) {
        Some(confed) => Some((team, confed)),
        None => {
            warn!(team = %team, code, "skipping ranking row with unknown confederation");
            None
        }
    }
}
