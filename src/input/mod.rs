use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::model::records::RawVehicleRecord;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column: {0}")]
    MissingColumn(String),
    #[error("dataset has no header row")]
    EmptyDataset,
}

/// Columns the scoring pipeline depends on. Extra columns in the dataset are
/// ignored; a missing required column is a caller contract violation and
/// fails fast.
const REQUIRED_COLUMNS: &[&str] = &[
    "brand",
    "model",
    "top_speed_kmh",
    "acceleration_0_100_s",
    "battery_capacity_kWh",
    "efficiency_wh_per_km",
    "range_km",
    "fast_charging_power_kw_dc",
];

pub fn load_dataset(path: &Path) -> Result<Vec<RawVehicleRecord>, InputError> {
    let file = File::open(path)?;
    let rows = parse_dataset(file)?;
    info!(rows = rows.len(), path = %path.display(), "vehicle dataset loaded");
    Ok(rows)
}

/// Parses a headered CSV. Empty feature cells become `None` and are left for
/// the cleaning stage to drop; non-numeric text in a feature column is a
/// hard parse error.
pub fn parse_dataset<R: Read>(reader: R) -> Result<Vec<RawVehicleRecord>, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(InputError::EmptyDataset);
    }
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *required) {
            return Err(InputError::MissingColumn((*required).to_string()));
        }
    }

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: RawVehicleRecord = result?;
        rows.push(row);
    }
    Ok(rows)
}
