use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::config::NormalizeConfig;
use crate::dataset;
use crate::dedup::{IdentifierRemap, MergeGroup, deduplicate};
use crate::match_rewrite::{RewriteStats, rewrite_matches};
use crate::reference::ReferenceData;
use crate::report;
use crate::store;
use crate::team_records::{EnrichedTeamRecord, build_team_records, normalization_examples};

const EXAMPLE_LIMIT: usize = 10;

/// Outcome of the match-reference stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchUpdate {
    Disabled,
    NothingToRemap,
    SourceMissing(PathBuf),
    /// The team output was still written; the match file is untouched.
    Failed(String),
    Applied(RewriteStats),
}

#[derive(Debug, Clone)]
pub struct NormalizeSummary {
    pub teams_in: usize,
    /// Deduplicated records, ascending by id.
    pub records: Vec<EnrichedTeamRecord>,
    pub groups: Vec<MergeGroup>,
    pub remap: IdentifierRemap,
    /// Raw names in input order, repeats included.
    pub unmatched: Vec<String>,
    pub examples: Vec<(String, String)>,
    pub matches: MatchUpdate,
    pub output_csv: PathBuf,
}

impl NormalizeSummary {
    pub fn match_update_failed(&self) -> bool {
        matches!(self.matches, MatchUpdate::Failed(_))
    }
}

/// Runs the whole normalization: read, resolve, deduplicate, write, then
/// repoint match references at surviving ids.
pub fn run(cfg: &NormalizeConfig, reference: &ReferenceData) -> Result<NormalizeSummary> {
    let started_at = Utc::now().to_rfc3339();

    let rows = dataset::read_team_rows(&cfg.teams_csv)
        .with_context(|| format!("load teams from {}", cfg.teams_csv.display()))?;
    info!(path = %cfg.teams_csv.display(), rows = rows.len(), "loaded team table");

    let built = build_team_records(&rows, reference);
    let examples = normalization_examples(&rows, reference, EXAMPLE_LIMIT);
    let deduped = deduplicate(built.records);
    debug!(
        kept = deduped.records.len(),
        merged_groups = deduped.groups.len(),
        "deduplicated team records"
    );

    dataset::write_team_records(&cfg.output_csv, &deduped.records)
        .with_context(|| format!("write teams to {}", cfg.output_csv.display()))?;
    if let Some(path) = &cfg.json_path {
        dataset::save_records_json(path, &deduped.records)
            .with_context(|| format!("write teams json to {}", path.display()))?;
    }

    let matches = update_matches(cfg, &deduped.remap);

    let summary = NormalizeSummary {
        teams_in: rows.len(),
        records: deduped.records,
        groups: deduped.groups,
        remap: deduped.remap,
        unmatched: built.unmatched,
        examples,
        matches,
        output_csv: cfg.output_csv.clone(),
    };

    if let Some(path) = &cfg.xlsx_path {
        report::export_xlsx(path, &summary)?;
    }
    if let Some(path) = &cfg.db_path {
        persist_run(path, &cfg.teams_csv, &summary, &started_at)?;
    }
    Ok(summary)
}

fn update_matches(cfg: &NormalizeConfig, remap: &IdentifierRemap) -> MatchUpdate {
    if !cfg.update_matches {
        return MatchUpdate::Disabled;
    }
    if remap.is_empty() {
        return MatchUpdate::NothingToRemap;
    }
    if !cfg.matches_csv.exists() {
        warn!(path = %cfg.matches_csv.display(), "match table not found");
        return MatchUpdate::SourceMissing(cfg.matches_csv.clone());
    }
    match rewrite_match_file(&cfg.matches_csv, remap) {
        Ok(stats) => MatchUpdate::Applied(stats),
        Err(err) => MatchUpdate::Failed(format!("{err:#}")),
    }
}

/// Rewrites the match file in place. Nothing is written unless the whole
/// table was read.
pub fn rewrite_match_file(path: &Path, remap: &IdentifierRemap) -> Result<RewriteStats> {
    let mut table = dataset::read_match_table(path)
        .with_context(|| format!("load matches from {}", path.display()))?;
    let stats = rewrite_matches(&mut table.rows, remap);
    if stats.references_updated > 0 {
        dataset::write_match_table(path, &table)
            .with_context(|| format!("write matches to {}", path.display()))?;
    }
    Ok(stats)
}

fn persist_run(
    db_path: &Path,
    input: &Path,
    summary: &NormalizeSummary,
    started_at: &str,
) -> Result<()> {
    let input_sha256 = store::fingerprint_file(input)?;
    let mut conn = store::open_db(db_path)?;
    let finished_at = Utc::now().to_rfc3339();
    store::save_teams(
        &mut conn,
        &summary.records,
        summary.remap.keys().copied(),
        &finished_at,
    )?;
    let run_id = store::record_run(&conn, summary, started_at, &finished_at, &input_sha256)?;
    debug!(run_id, db = %db_path.display(), "recorded normalize run");
    Ok(())
}
