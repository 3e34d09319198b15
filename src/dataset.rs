use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::StringRecord;

use crate::error::{NormalizeError, Result};
use crate::match_rewrite::MatchRow;
use crate::reference::Confederation;
use crate::team_records::{EnrichedTeamRecord, RawTeamRow};

pub const TEAM_OUTPUT_HEADERS: [&str; 4] = ["id_team", "nom_standard", "confederation", "aliases"];

/// The match table as read, with the positions of the two team id columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchTable {
    pub headers: Vec<String>,
    pub home_idx: usize,
    pub away_idx: usize,
    pub rows: Vec<MatchRow>,
}

pub fn read_team_rows(path: &Path) -> Result<Vec<RawTeamRow>> {
    let file = open_source(path)?;
    parse_team_rows(file, path)
}

pub fn parse_team_rows<R: Read>(reader: R, source: &Path) -> Result<Vec<RawTeamRow>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = headers_of(&mut rdr, source)?;
    let id_idx = column_index(&headers, "id_team", source)?;
    let name_idx = column_index(&headers, "nom_standard", source)?;

    let mut out = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|source_err| csv_error(source, source_err))?;
        let id_team = parse_id_cell(&record, id_idx, "id_team", source)?;
        let raw_name = record
            .get(name_idx)
            .filter(|cell| !cell.is_empty())
            .map(str::to_string);
        out.push(RawTeamRow { id_team, raw_name });
    }
    Ok(out)
}

/// Writes the normalized team table. The file is swapped in only once
/// fully written.
pub fn write_team_records(path: &Path, records: &[EnrichedTeamRecord]) -> Result<()> {
    let tmp = tmp_sibling(path);
    ensure_parent(path)?;
    {
        let mut wtr = csv::Writer::from_path(&tmp).map_err(|err| csv_error(&tmp, err))?;
        wtr.write_record(TEAM_OUTPUT_HEADERS)
            .map_err(|err| csv_error(&tmp, err))?;
        for record in records {
            let aliases =
                serde_json::to_string(&record.aliases).unwrap_or_else(|_| "[]".to_string());
            wtr.write_record([
                record.id_team.to_string().as_str(),
                record.canonical_name.as_str(),
                record.confederation_label(),
                aliases.as_str(),
            ])
            .map_err(|err| csv_error(&tmp, err))?;
        }
        wtr.flush().map_err(|err| io_error(&tmp, err))?;
    }
    swap_into_place(&tmp, path)
}

/// Reads a table written by [`write_team_records`].
pub fn read_team_records(path: &Path) -> Result<Vec<EnrichedTeamRecord>> {
    let file = open_source(path)?;
    let mut rdr = csv::Reader::from_reader(file);
    let headers = headers_of(&mut rdr, path)?;
    let id_idx = column_index(&headers, "id_team", path)?;
    let name_idx = column_index(&headers, "nom_standard", path)?;
    let confed_idx = column_index(&headers, "confederation", path)?;
    let aliases_idx = column_index(&headers, "aliases", path)?;

    let mut out = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|err| csv_error(path, err))?;
        let id_team = parse_id_cell(&record, id_idx, "id_team", path)?;
        let aliases_raw = record.get(aliases_idx).unwrap_or("[]");
        let aliases = if aliases_raw.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str::<Vec<String>>(aliases_raw)
                .map_err(|source| NormalizeError::AliasesJson { id_team, source })?
        };
        out.push(EnrichedTeamRecord {
            id_team,
            canonical_name: record.get(name_idx).unwrap_or_default().to_string(),
            confederation: record.get(confed_idx).and_then(Confederation::parse),
            aliases,
        });
    }
    Ok(out)
}

pub fn save_records_json(path: &Path, records: &[EnrichedTeamRecord]) -> Result<()> {
    ensure_parent(path)?;
    let tmp = tmp_sibling(path);
    let json = serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string());
    fs::write(&tmp, json).map_err(|err| io_error(&tmp, err))?;
    swap_into_place(&tmp, path)
}

pub fn read_match_table(path: &Path) -> Result<MatchTable> {
    let file = open_source(path)?;
    parse_match_table(file, path)
}

pub fn parse_match_table<R: Read>(reader: R, source: &Path) -> Result<MatchTable> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = headers_of(&mut rdr, source)?;
    let home_idx = column_index(&headers, "home_team_id", source)?;
    let away_idx = column_index(&headers, "away_team_id", source)?;
    let match_idx = headers.iter().position(|h| h == "id_match");

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|err| csv_error(source, err))?;
        let home_team_id = parse_id_cell(&record, home_idx, "home_team_id", source)?;
        let away_team_id = parse_id_cell(&record, away_idx, "away_team_id", source)?;
        let id_match = match_idx.and_then(|idx| record.get(idx)).and_then(parse_id);
        rows.push(MatchRow {
            id_match,
            home_team_id,
            away_team_id,
            fields: record.iter().map(str::to_string).collect(),
        });
    }

    Ok(MatchTable {
        headers: headers.iter().map(str::to_string).collect(),
        home_idx,
        away_idx,
        rows,
    })
}

/// Writes the match table back with every column in its original order.
/// Nothing reaches `path` unless the whole table was written.
pub fn write_match_table(path: &Path, table: &MatchTable) -> Result<()> {
    let tmp = tmp_sibling(path);
    ensure_parent(path)?;
    {
        let mut wtr = csv::Writer::from_path(&tmp).map_err(|err| csv_error(&tmp, err))?;
        wtr.write_record(&table.headers)
            .map_err(|err| csv_error(&tmp, err))?;
        for row in &table.rows {
            let mut fields = row.fields.clone();
            fields.resize(table.headers.len(), String::new());
            set_id_cell(&mut fields, table.home_idx, row.home_team_id);
            set_id_cell(&mut fields, table.away_idx, row.away_team_id);
            wtr.write_record(&fields)
                .map_err(|err| csv_error(&tmp, err))?;
        }
        wtr.flush().map_err(|err| io_error(&tmp, err))?;
    }
    swap_into_place(&tmp, path)
}

/// Accepts plain integers and integral floats ("12.0"), which pandas emits
/// for id columns that once held a NaN.
pub fn parse_id(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(id) = raw.parse::<i64>() {
        return Some(id);
    }
    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

fn set_id_cell(fields: &mut [String], idx: usize, id: i64) {
    let Some(cell) = fields.get_mut(idx) else {
        return;
    };
    // Leave untouched cells byte-for-byte as read.
    if parse_id(cell) != Some(id) {
        *cell = id.to_string();
    }
}

fn parse_id_cell(
    record: &StringRecord,
    idx: usize,
    column: &'static str,
    source: &Path,
) -> Result<i64> {
    let raw = record.get(idx).unwrap_or_default();
    parse_id(raw).ok_or_else(|| NormalizeError::MalformedRow {
        path: source.to_path_buf(),
        line: record.position().map(|p| p.line()).unwrap_or_default(),
        column,
        value: raw.to_string(),
    })
}

fn open_source(path: &Path) -> Result<fs::File> {
    if !path.exists() {
        return Err(NormalizeError::MissingSource {
            path: path.to_path_buf(),
        });
    }
    fs::File::open(path).map_err(|err| io_error(path, err))
}

fn headers_of<R: Read>(rdr: &mut csv::Reader<R>, source: &Path) -> Result<StringRecord> {
    rdr.headers()
        .cloned()
        .map_err(|err| csv_error(source, err))
}

fn column_index(headers: &StringRecord, column: &'static str, source: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| NormalizeError::MissingColumn {
            path: source.to_path_buf(),
            column,
        })
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|err| io_error(dir, err))
        }
        _ => Ok(()),
    }
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn swap_into_place(tmp: &Path, path: &Path) -> Result<()> {
    fs::rename(tmp, path).map_err(|err| io_error(path, err))
}

fn csv_error(path: &Path, source: csv::Error) -> NormalizeError {
    NormalizeError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

fn io_error(path: &Path, source: std::io::Error) -> NormalizeError {
    NormalizeError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> PathBuf {
        PathBuf::from("teams.csv")
    }

    #[test]
    fn team_rows_keep_extra_columns_out_and_empty_names_missing() {
        let csv_data = "\
id_team,nom_standard,source
1,France,wiki
2,,wiki
3,  West Germany ,wiki
";
        let rows = parse_team_rows(csv_data.as_bytes(), &source()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].raw_name, None);
        assert_eq!(rows[2].raw_name.as_deref(), Some("  West Germany "));
    }

    #[test]
    fn malformed_id_is_reported_with_its_line() {
        let csv_data = "\
id_team,nom_standard
1,France
x2,Brazil
";
        let err = parse_team_rows(csv_data.as_bytes(), &source()).unwrap_err();
        match err {
            NormalizeError::MalformedRow {
                line,
                column,
                value,
                ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(column, "id_team");
                assert_eq!(value, "x2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_column_is_an_error() {
        let err = parse_team_rows("id,name\n1,France\n".as_bytes(), &source()).unwrap_err();
        assert!(matches!(
            err,
            NormalizeError::MissingColumn {
                column: "id_team",
                ..
            }
        ));
    }

    #[test]
    fn header_only_input_is_empty() {
        let rows = parse_team_rows("id_team,nom_standard\n".as_bytes(), &source()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn parse_id_accepts_integral_floats_only() {
        assert_eq!(parse_id(" 12 "), Some(12));
        assert_eq!(parse_id("12.0"), Some(12));
        assert_eq!(parse_id("12.5"), None);
        assert_eq!(parse_id("nan"), None);
        assert_eq!(parse_id(""), None);
    }

    #[test]
    fn match_table_records_id_positions() {
        let csv_data = "\
id_match,home_team_id,away_team_id,home_score
1,1,2,2
2,3.0,5,1
";
        let table = parse_match_table(csv_data.as_bytes(), Path::new("matches.csv")).unwrap();
        assert_eq!((table.home_idx, table.away_idx), (1, 2));
        assert_eq!(table.rows[1].home_team_id, 3);
        assert_eq!(table.rows[1].id_match, Some(2));
        assert_eq!(table.rows[1].fields[1], "3.0");
    }

    #[test]
    fn set_id_cell_only_rewrites_changed_ids() {
        let mut fields = vec!["3.0".to_string(), "4".to_string()];
        set_id_cell(&mut fields, 0, 3);
        set_id_cell(&mut fields, 1, 2);
        assert_eq!(fields, ["3.0", "2"]);
    }

    #[test]
    fn tmp_sibling_appends_suffix() {
        assert_eq!(
            tmp_sibling(Path::new("data/matches.csv")),
            PathBuf::from("data/matches.csv.tmp")
        );
    }
}
