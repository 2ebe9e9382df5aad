use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

// Column names used by the launch records CSV export.
const COL_SITE: &str = "Launch Site";
const COL_PAYLOAD: &str = "Payload Mass (kg)";
const COL_BOOSTER: &str = "Booster Version Category";
const COL_CLASS: &str = "class";

/// Structural problems with the input file, as opposed to per-cell parse
/// errors which carry row context via `anyhow`.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – the launch records export (see column constants above)
/// * `.json` – records-oriented array: `[{ "site": ..., "payload_mass_kg": ...,
///   "booster_category": ..., "outcome": 0|1 }, ...]`
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV file")?;
            parse_csv(file)
        }
        "json" => {
            let file = std::fs::File::open(path).context("opening JSON file")?;
            parse_json(file)
        }
        other => Err(SchemaError::UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// Parse the launch records CSV. Extra columns (flight number, version
/// strings, ...) are ignored; only the four semantic columns are required.
pub fn parse_csv(input: impl Read) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let col = |name: &'static str| -> Result<usize, SchemaError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(SchemaError::MissingColumn(name))
    };
    let site_idx = col(COL_SITE)?;
    let payload_idx = col(COL_PAYLOAD)?;
    let booster_idx = col(COL_BOOSTER)?;
    let class_idx = col(COL_CLASS)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

        let payload_mass_kg: f64 = cell(payload_idx)
            .parse()
            .with_context(|| format!("CSV row {row_no}: bad payload mass '{}'", cell(payload_idx)))?;
        if payload_mass_kg < 0.0 {
            bail!("CSV row {row_no}: negative payload mass {payload_mass_kg}");
        }

        let flag: u8 = cell(class_idx)
            .parse()
            .with_context(|| format!("CSV row {row_no}: bad class '{}'", cell(class_idx)))?;
        let outcome = Outcome::from_flag(flag)
            .with_context(|| format!("CSV row {row_no}: class must be 0 or 1, got {flag}"))?;

        records.push(LaunchRecord {
            site: cell(site_idx).to_string(),
            payload_mass_kg,
            booster_category: cell(booster_idx).to_string(),
            outcome,
        });
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawRecord {
    site: String,
    payload_mass_kg: f64,
    booster_category: String,
    /// 1 = success, 0 = failure, matching the CSV class column.
    outcome: u8,
}

/// Parse a records-oriented JSON array of launches.
pub fn parse_json(input: impl Read) -> Result<LaunchDataset> {
    let raw: Vec<RawRecord> = serde_json::from_reader(input).context("parsing JSON")?;

    let mut records = Vec::with_capacity(raw.len());
    for (row_no, r) in raw.into_iter().enumerate() {
        if r.payload_mass_kg < 0.0 {
            bail!("JSON row {row_no}: negative payload mass {}", r.payload_mass_kg);
        }
        let outcome = Outcome::from_flag(r.outcome)
            .with_context(|| format!("JSON row {row_no}: outcome must be 0 or 1, got {}", r.outcome))?;
        records.push(LaunchRecord {
            site: r.site,
            payload_mass_kg: r.payload_mass_kg,
            booster_category: r.booster_category,
            outcome,
        });
    }

    Ok(LaunchDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category
1,CCAFS LC-40,0,0,v1.0
2,CCAFS LC-40,1,525,v1.0
3,VAFB SLC-4E,1,500,v1.1
";

    #[test]
    fn parses_csv_with_extra_columns() {
        let ds = parse_csv(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.sites, vec!["CCAFS LC-40".to_string(), "VAFB SLC-4E".to_string()]);
        assert_eq!(ds.min_payload, 0.0);
        assert_eq!(ds.max_payload, 525.0);
        assert_eq!(ds.records[1].outcome, Outcome::Success);
        assert_eq!(ds.records[2].booster_category, "v1.1");
    }

    #[test]
    fn csv_missing_column_is_reported_by_name() {
        let err = parse_csv("Launch Site,class\nA,1\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Payload Mass (kg)"));
    }

    #[test]
    fn csv_bad_class_value_is_rejected() {
        let csv = "Launch Site,Payload Mass (kg),Booster Version Category,class\nA,100,v1,3\n";
        assert!(parse_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn csv_bad_payload_is_rejected_with_row_context() {
        let csv = "Launch Site,Payload Mass (kg),Booster Version Category,class\nA,heavy,v1,1\n";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("row 0"));
    }

    #[test]
    fn parses_json_records() {
        let json = r#"[
            {"site": "A", "payload_mass_kg": 500.0, "booster_category": "v1", "outcome": 1},
            {"site": "B", "payload_mass_kg": 3000.0, "booster_category": "v2", "outcome": 0}
        ]"#;
        let ds = parse_json(json.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].outcome, Outcome::Success);
        assert_eq!(ds.records[1].outcome, Outcome::Failure);
    }

    #[test]
    fn json_invalid_outcome_is_rejected() {
        let json = r#"[{"site": "A", "payload_mass_kg": 1.0, "booster_category": "v1", "outcome": 7}]"#;
        assert!(parse_json(json.as_bytes()).is_err());
    }
}
