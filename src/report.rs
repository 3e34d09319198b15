use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};
use tracing::{info, warn};

use crate::pipeline::{MatchUpdate, NormalizeSummary};

/// Unmatched raw names, deduplicated and sorted.
pub fn unique_unmatched(summary: &NormalizeSummary) -> Vec<String> {
    summary
        .unmatched
        .iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Emits the resolution report as structured log records.
pub fn log_report(summary: &NormalizeSummary) {
    info!(
        teams_in = summary.teams_in,
        teams_out = summary.records.len(),
        merged_groups = summary.groups.len(),
        unmatched = summary.unmatched.len(),
        "team normalization finished"
    );
    for group in &summary.groups {
        info!(
            team = %group.canonical_name,
            surviving = group.surviving,
            retired = ?group.retired,
            "merged duplicate team ids"
        );
    }
    match &summary.matches {
        MatchUpdate::Applied(stats) => {
            for (retired, counts) in &stats.per_retired_id {
                info!(
                    retired = *retired,
                    surviving = summary.remap.get(retired).copied().unwrap_or_default(),
                    home = counts.home,
                    away = counts.away,
                    "rewrote match references"
                );
            }
            info!(
                references_updated = stats.references_updated,
                "match table updated"
            );
        }
        MatchUpdate::SourceMissing(path) => {
            warn!(path = %path.display(), "match table not found, references left as-is");
        }
        MatchUpdate::Failed(err) => warn!(error = %err, "match table update failed"),
        MatchUpdate::Disabled | MatchUpdate::NothingToRemap => {}
    }
    for name in unique_unmatched(summary) {
        warn!(raw_name = %name, "unmatched team name");
    }
}

pub fn render_text(summary: &NormalizeSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Team normalization complete");
    let _ = writeln!(out, "Output: {}", summary.output_csv.display());
    let _ = writeln!(
        out,
        "Teams: {} in, {} out",
        summary.teams_in,
        summary.records.len()
    );

    if !summary.groups.is_empty() {
        let _ = writeln!(out, "Merged duplicates: {}", summary.groups.len());
        for group in &summary.groups {
            let _ = writeln!(
                out,
                "  {}: ids {:?} -> kept {}, retired {:?}",
                group.canonical_name, group.identifiers, group.surviving, group.retired
            );
        }
    }

    match &summary.matches {
        MatchUpdate::Applied(stats) => {
            for (retired, counts) in &stats.per_retired_id {
                let surviving = summary.remap.get(retired).copied().unwrap_or_default();
                let _ = writeln!(
                    out,
                    "  id {retired} -> {surviving}: {} (home) + {} (away) = {} matches",
                    counts.home,
                    counts.away,
                    counts.total()
                );
            }
            let _ = writeln!(
                out,
                "Match references updated: {}",
                stats.references_updated
            );
        }
        MatchUpdate::Disabled => {
            let _ = writeln!(out, "Match references: update disabled");
        }
        MatchUpdate::NothingToRemap => {
            let _ = writeln!(out, "Match references: nothing to remap");
        }
        MatchUpdate::SourceMissing(path) => {
            let _ = writeln!(out, "Match references: {} not found", path.display());
        }
        MatchUpdate::Failed(err) => {
            let _ = writeln!(out, "Match references: update failed: {err}");
        }
    }

    let unmatched = unique_unmatched(summary);
    if unmatched.is_empty() {
        let _ = writeln!(out, "All teams matched");
    } else {
        let _ = writeln!(out, "Unmatched teams ({}):", summary.unmatched.len());
        for name in unmatched {
            let _ = writeln!(out, "  - {name}");
        }
    }

    if !summary.examples.is_empty() {
        let _ = writeln!(out, "Examples:");
        for (raw, canonical) in &summary.examples {
            let _ = writeln!(out, "  {raw} -> {canonical}");
        }
    }
    out
}

/// Workbook with the normalized teams, the merges and the unmatched names.
pub fn export_xlsx(path: &Path, summary: &NormalizeSummary) -> Result<()> {
    let mut teams_rows = vec![vec![
        "Team ID".to_string(),
        "Team".to_string(),
        "Confed".to_string(),
        "Aliases".to_string(),
    ]];
    teams_rows.extend(summary.records.iter().map(|record| {
        vec![
            record.id_team.to_string(),
            record.canonical_name.clone(),
            record.confederation_label().to_string(),
            record.aliases.join(", "),
        ]
    }));

    let mut merge_rows = vec![vec![
        "Team".to_string(),
        "Kept ID".to_string(),
        "Retired IDs".to_string(),
        "Home Refs".to_string(),
        "Away Refs".to_string(),
    ]];
    for group in &summary.groups {
        let (home, away) = match &summary.matches {
            MatchUpdate::Applied(stats) => group
                .retired
                .iter()
                .filter_map(|id| stats.per_retired_id.get(id))
                .fold((0, 0), |(h, a), c| (h + c.home, a + c.away)),
            _ => (0, 0),
        };
        merge_rows.push(vec![
            group.canonical_name.clone(),
            group.surviving.to_string(),
            group
                .retired
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            home.to_string(),
            away.to_string(),
        ]);
    }

    let mut unmatched_rows = vec![vec!["Raw Name".to_string()]];
    unmatched_rows.extend(unique_unmatched(summary).into_iter().map(|name| vec![name]));

    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Teams")?;
        write_rows(sheet, &teams_rows)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Merges")?;
        write_rows(sheet, &merge_rows)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Unmatched")?;
        write_rows(sheet, &unmatched_rows)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;
    Ok(())
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
