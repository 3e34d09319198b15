use rayon::prelude::*;
use serde::{Serialize, Serializer};

use crate::reference::{Confederation, ReferenceData};
use crate::resolver::resolve;

const PAR_MIN_ROWS: usize = 256;

/// One row of the team input table, as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTeamRow {
    pub id_team: i64,
    pub raw_name: Option<String>,
}

impl RawTeamRow {
    pub fn new(id_team: i64, raw_name: impl Into<String>) -> Self {
        Self {
            id_team,
            raw_name: Some(raw_name.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedTeamRecord {
    pub id_team: i64,
    #[serde(rename = "nom_standard")]
    pub canonical_name: String,
    #[serde(serialize_with = "serialize_confederation")]
    pub confederation: Option<Confederation>,
    pub aliases: Vec<String>,
}

impl EnrichedTeamRecord {
    /// Confederation code, or an empty string when the team has none.
    pub fn confederation_label(&self) -> &'static str {
        self.confederation.map(Confederation::label).unwrap_or_default()
    }
}

fn serialize_confederation<S: Serializer>(
    confed: &Option<Confederation>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(confed.map(Confederation::label).unwrap_or_default())
}

#[derive(Debug, Clone, Default)]
pub struct TeamRecords {
    pub records: Vec<EnrichedTeamRecord>,
    /// Raw names that could not be tied to a known team, in input order.
    pub unmatched: Vec<String>,
}

/// Resolves every row and attaches confederation and aliases.
///
/// One record per input row, in input order. Rows are resolved in parallel;
/// the indexed collect keeps both outputs in input order.
pub fn build_team_records(rows: &[RawTeamRow], reference: &ReferenceData) -> TeamRecords {
    let enriched = rows
        .par_iter()
        .with_min_len(PAR_MIN_ROWS)
        .map(|row| enrich_row(row, reference))
        .collect::<Vec<_>>();

    let mut out = TeamRecords {
        records: Vec::with_capacity(enriched.len()),
        unmatched: Vec::new(),
    };
    for (record, unmatched) in enriched {
        if let Some(raw) = unmatched {
            out.unmatched.push(raw);
        }
        out.records.push(record);
    }
    out
}

fn enrich_row(row: &RawTeamRow, reference: &ReferenceData) -> (EnrichedTeamRecord, Option<String>) {
    let raw = row.raw_name.as_deref().unwrap_or_default();
    let (canonical_name, unmatched) = match resolve(row.raw_name.as_deref(), reference) {
        // Placeholders and missing names keep their raw text so no row is lost.
        None => (raw.to_string(), Some(raw.to_string())),
        Some(name) if name == raw.trim() && !reference.is_known_canonical(&name) => {
            (raw.to_string(), Some(raw.to_string()))
        }
        Some(name) => (name, None),
    };

    let record = EnrichedTeamRecord {
        id_team: row.id_team,
        confederation: reference.confederation(&canonical_name),
        aliases: reference.aliases_of(&canonical_name).to_vec(),
        canonical_name,
    };
    (record, unmatched)
}

/// Up to `limit` raw names that the exact alias table rewrote, in input order.
pub fn normalization_examples(
    rows: &[RawTeamRow],
    reference: &ReferenceData,
    limit: usize,
) -> Vec<(String, String)> {
    rows.iter()
        .filter_map(|row| {
            let raw = row.raw_name.as_deref()?;
            let canonical = reference.alias_target(raw)?;
            (canonical != raw).then(|| (raw.to_string(), canonical.to_string()))
        })
        .take(limit)
        .collect()
}
