use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the tabular inputs and outputs of a normalization run.
///
/// Resolution and deduplication never fail; everything here comes from the
/// files around them.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("input source not found: {}", path.display())]
    MissingSource { path: PathBuf },

    #[error("{}: missing required column `{column}`", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{}:{line}: column `{column}` is not an integer: {value:?}", path.display())]
    MalformedRow {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("csv error in {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("io error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid aliases json for team {id_team}")]
    AliasesJson {
        id_team: i64,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
