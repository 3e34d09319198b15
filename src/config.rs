use std::path::PathBuf;

use anyhow::{Result, anyhow};

const DEFAULT_TEAMS_CSV: &str = "data/processed/teams.csv";
const DEFAULT_OUTPUT_CSV: &str = "data/processed/teams_traitees.csv";
const DEFAULT_MATCHES_CSV: &str = "data/processed/matches.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeConfig {
    pub teams_csv: PathBuf,
    pub output_csv: PathBuf,
    pub matches_csv: PathBuf,
    /// FIFA ranking source (`.json` cache or `.csv` export); embedded list when unset.
    pub rankings_path: Option<PathBuf>,
    pub db_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
    pub xlsx_path: Option<PathBuf>,
    pub update_matches: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            teams_csv: PathBuf::from(DEFAULT_TEAMS_CSV),
            output_csv: PathBuf::from(DEFAULT_OUTPUT_CSV),
            matches_csv: PathBuf::from(DEFAULT_MATCHES_CSV),
            rankings_path: None,
            db_path: None,
            json_path: None,
            xlsx_path: None,
            update_matches: true,
        }
    }
}

impl NormalizeConfig {
    /// Defaults overridden by the process environment (after `.env.local`
    /// and `.env` have been loaded).
    pub fn from_env() -> Self {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::from_filename(".env");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path_var = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
                .map(PathBuf::from)
        };

        let mut cfg = Self::default();
        if let Some(path) = path_var("TEAMS_CSV") {
            cfg.teams_csv = path;
        }
        if let Some(path) = path_var("TEAMS_OUTPUT_CSV") {
            cfg.output_csv = path;
        }
        if let Some(path) = path_var("MATCHES_CSV") {
            cfg.matches_csv = path;
        }
        cfg.rankings_path = path_var("RANKINGS_PATH");
        cfg.db_path = path_var("TEAMS_DB");
        cfg.json_path = path_var("TEAMS_JSON");
        cfg.xlsx_path = path_var("TEAMS_XLSX");
        if let Some(flag) = lookup("UPDATE_MATCHES").and_then(|raw| parse_bool(&raw)) {
            cfg.update_matches = flag;
        }
        cfg
    }

    /// Applies command-line flags on top of the current values.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        for (idx, arg) in args.iter().enumerate() {
            if arg == "--no-update-matches" {
                self.update_matches = false;
                continue;
            }
            let Some(flag) = arg.strip_prefix("--") else {
                continue;
            };
            let (name, inline) = match flag.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (flag, None),
            };
            match name {
                "teams" => self.teams_csv = flag_value(args, idx, inline, name)?,
                "output" => self.output_csv = flag_value(args, idx, inline, name)?,
                "matches" => self.matches_csv = flag_value(args, idx, inline, name)?,
                "rankings" => self.rankings_path = Some(flag_value(args, idx, inline, name)?),
                "db" => self.db_path = Some(flag_value(args, idx, inline, name)?),
                "json" => self.json_path = Some(flag_value(args, idx, inline, name)?),
                "xlsx" => self.xlsx_path = Some(flag_value(args, idx, inline, name)?),
                _ => {}
            }
        }
        Ok(())
    }
}

fn flag_value(args: &[String], idx: usize, inline: Option<String>, name: &str) -> Result<PathBuf> {
    let raw = match inline {
        Some(value) => value,
        None => args
            .get(idx + 1)
            .filter(|next| !next.starts_with("--"))
            .cloned()
            .ok_or_else(|| anyhow!("--{name} requires a value"))?,
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("--{name} requires a non-empty value"));
    }
    Ok(PathBuf::from(trimmed))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn env_overrides_defaults() {
        let env = HashMap::from([
            ("TEAMS_CSV", "in/teams.csv"),
            ("TEAMS_DB", "  "),
            ("UPDATE_MATCHES", "false"),
        ]);
        let cfg = NormalizeConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(cfg.teams_csv, PathBuf::from("in/teams.csv"));
        assert_eq!(cfg.output_csv, PathBuf::from(DEFAULT_OUTPUT_CSV));
        assert_eq!(cfg.db_path, None);
        assert!(!cfg.update_matches);
    }

    #[test]
    fn flags_accept_both_forms() {
        let mut cfg = NormalizeConfig::default();
        cfg.apply_args(&args(&[
            "--teams=a.csv",
            "--matches",
            "m.csv",
            "--db",
            "teams.sqlite",
            "--no-update-matches",
        ]))
        .unwrap();
        assert_eq!(cfg.teams_csv, PathBuf::from("a.csv"));
        assert_eq!(cfg.matches_csv, PathBuf::from("m.csv"));
        assert_eq!(cfg.db_path, Some(PathBuf::from("teams.sqlite")));
        assert!(!cfg.update_matches);
    }

    #[test]
    fn flag_without_value_is_rejected() {
        let mut cfg = NormalizeConfig::default();
        assert!(cfg.apply_args(&args(&["--output", "--json=x.json"])).is_err());
        assert!(cfg.apply_args(&args(&["--xlsx="])).is_err());
    }
}
