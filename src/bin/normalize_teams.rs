use anyhow::{Result, anyhow};

use wc_teams_etl::config::NormalizeConfig;
use wc_teams_etl::logging::init_logging;
use wc_teams_etl::{pipeline, rankings, report};

fn main() -> Result<()> {
    init_logging();

    let mut cfg = NormalizeConfig::from_env();
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    cfg.apply_args(&args)?;

    let reference = rankings::load_reference(cfg.rankings_path.as_deref())?;
    let summary = pipeline::run(&cfg, &reference)?;

    report::log_report(&summary);
    print!("{}", report::render_text(&summary));
    if let Some(path) = &cfg.json_path {
        println!("JSON: {}", path.display());
    }
    if let Some(path) = &cfg.xlsx_path {
        println!("Workbook: {}", path.display());
    }
    if let Some(path) = &cfg.db_path {
        println!("DB: {}", path.display());
    }

    if summary.match_update_failed() {
        return Err(anyhow!(
            "team table written to {} but match references were not updated",
            summary.output_csv.display()
        ));
    }
    Ok(())
}
