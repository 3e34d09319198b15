use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{Connection, params};
use sha2::{Digest, Sha256};

use crate::pipeline::{MatchUpdate, NormalizeSummary};
use crate::team_records::EnrichedTeamRecord;

pub fn open_db(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    let conn =
        Connection::open(path).with_context(|| format!("open sqlite db {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        PRAGMA journal_mode = WAL;
        CREATE TABLE IF NOT EXISTS teams (
            id_team INTEGER PRIMARY KEY,
            nom_standard TEXT NOT NULL,
            confederation TEXT NOT NULL,
            aliases_json TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_teams_name ON teams(nom_standard);

        CREATE TABLE IF NOT EXISTS normalize_runs (
            run_id INTEGER PRIMARY KEY AUTOINCREMENT,
            started_at TEXT NOT NULL,
            finished_at TEXT NOT NULL,
            teams_in INTEGER NOT NULL,
            teams_out INTEGER NOT NULL,
            merged_groups INTEGER NOT NULL,
            references_updated INTEGER NOT NULL,
            unmatched_json TEXT NOT NULL,
            input_sha256 TEXT NOT NULL
        );
        "#,
    )
    .context("create sqlite schema")?;
    Ok(())
}

/// Replaces the stored team set: upserts every record and deletes the ids
/// that deduplication retired, in one transaction.
pub fn save_teams(
    conn: &mut Connection,
    records: &[EnrichedTeamRecord],
    retired: impl IntoIterator<Item = i64>,
    updated_at: &str,
) -> Result<usize> {
    let tx = conn.transaction().context("begin teams transaction")?;
    for record in records {
        let aliases_json =
            serde_json::to_string(&record.aliases).unwrap_or_else(|_| "[]".to_string());
        tx.execute(
            r#"
            INSERT INTO teams (id_team, nom_standard, confederation, aliases_json, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(id_team) DO UPDATE SET
                nom_standard = excluded.nom_standard,
                confederation = excluded.confederation,
                aliases_json = excluded.aliases_json,
                updated_at = excluded.updated_at
            "#,
            params![
                record.id_team,
                record.canonical_name,
                record.confederation_label(),
                aliases_json,
                updated_at,
            ],
        )
        .context("upsert team")?;
    }
    for id in retired {
        tx.execute("DELETE FROM teams WHERE id_team = ?1", params![id])
            .context("delete retired team")?;
    }
    tx.commit().context("commit teams transaction")?;
    Ok(records.len())
}

pub fn record_run(
    conn: &Connection,
    summary: &NormalizeSummary,
    started_at: &str,
    finished_at: &str,
    input_sha256: &str,
) -> Result<i64> {
    let references_updated = match &summary.matches {
        MatchUpdate::Applied(stats) => stats.references_updated,
        _ => 0,
    };
    let unmatched_json =
        serde_json::to_string(&summary.unmatched).unwrap_or_else(|_| "[]".to_string());
    conn.execute(
        "INSERT INTO normalize_runs(started_at, finished_at, teams_in, teams_out, merged_groups, references_updated, unmatched_json, input_sha256)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            started_at,
            finished_at,
            summary.teams_in as i64,
            summary.records.len() as i64,
            summary.groups.len() as i64,
            references_updated as i64,
            unmatched_json,
            input_sha256,
        ],
    )
    .context("insert normalize run")?;
    Ok(conn.last_insert_rowid())
}

pub fn load_team_names(conn: &Connection) -> Result<Vec<(i64, String)>> {
    let mut stmt = conn
        .prepare("SELECT id_team, nom_standard FROM teams ORDER BY id_team ASC")
        .context("prepare load teams query")?;
    let rows = stmt
        .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))
        .context("query load teams")?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row.context("decode team row")?);
    }
    Ok(out)
}

/// Hex SHA-256 of a file, recorded with each run to spot re-runs on the
/// same input.
pub fn fingerprint_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    Ok(hex_digest(&bytes))
}

fn hex_digest(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}
