use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use wc_teams_etl::config::NormalizeConfig;
use wc_teams_etl::logging::init_logging;
use wc_teams_etl::rankings;

fn main() -> Result<()> {
    init_logging();

    let cfg = NormalizeConfig::from_env();
    let rankings_path = parse_path_arg("--rankings").or(cfg.rankings_path);
    let reference = rankings::load_reference(rankings_path.as_deref())?;

    let entries = reference
        .teams_reference()
        .into_iter()
        .map(|entry| (entry.name.clone(), entry))
        .collect::<BTreeMap<_, _>>();
    let json = serde_json::to_string_pretty(&entries).context("serialize teams reference")?;

    match parse_path_arg("--out") {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).ok();
            }
            fs::write(&path, json)
                .with_context(|| format!("write teams reference to {}", path.display()))?;
            println!("Teams reference: {} entries -> {}", entries.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn parse_path_arg(flag: &str) -> Option<PathBuf> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let inline_prefix = format!("{flag}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(path) = arg.strip_prefix(&inline_prefix) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        if arg == flag
            && let Some(next) = args.get(idx + 1)
            && !next.trim().is_empty()
        {
            return Some(PathBuf::from(next.trim()));
        }
    }
    None
}
