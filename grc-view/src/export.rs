//! CSV export of the displayed table.
//!
//! # CSV Format
//!
//! Header row, then one row per displayed record:
//! ```text
//! id,asset,threat,likelihood,impact,score,level,hint
//! 1,DB,SQLi,4,5,20,Critical,Immediate action required: NIST PR.AC-7 + ISO 27001 controls
//! ```

use chrono::{Local, NaiveDate};
use grc_core::level::level_label;
use grc_core::RiskRecord;

pub const CSV_HEADER: [&str; 8] = [
    "id",
    "asset",
    "threat",
    "likelihood",
    "impact",
    "score",
    "level",
    "hint",
];

/// Serialize the given rows (already filtered and sorted) as CSV.
pub fn to_csv(rows: &[&RiskRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(CSV_HEADER)?;
    for r in rows {
        wtr.write_record([
            r.id.to_string(),
            r.asset.clone(),
            r.threat.clone(),
            r.likelihood.to_string(),
            r.impact.to_string(),
            r.score.to_string(),
            level_label(r.level).to_string(),
            r.hint.clone(),
        ])?;
    }
    let bytes = wtr.into_inner().map_err(|e| anyhow::anyhow!("{}", e))?;
    log::info!("export: Wrote {} rows", rows.len());
    Ok(String::from_utf8(bytes)?)
}

/// `risk_register_YYYY-MM-DD.csv`
pub fn export_filename(date: &NaiveDate) -> String {
    format!("risk_register_{}.csv", date.format("%Y-%m-%d"))
}

/// Filename stamped with today's local date.
pub fn export_filename_today() -> String {
    export_filename(&Local::now().date_naive())
}
