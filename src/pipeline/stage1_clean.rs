use tracing::warn;

use crate::model::records::{RawVehicleRecord, VehicleRecord};
use crate::stats::percentile_linear;

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub records: Vec<VehicleRecord>,
    pub dropped: usize,
}

/// Cleaning half of the feature normalizer: rows with any missing or
/// non-finite feature are dropped entirely (no partial scoring), then each
/// surviving feature column is clipped to the interquartile outlier fence.
pub fn run_stage1(raw: &[RawVehicleRecord]) -> Stage1Output {
    let mut records = Vec::with_capacity(raw.len());
    let mut dropped = 0usize;

    for row in raw {
        match VehicleRecord::from_raw(row) {
            Some(record) => records.push(record),
            None => {
                dropped += 1;
                warn!(
                    brand = %row.brand,
                    model = %row.model,
                    "dropping vehicle with missing feature values"
                );
            }
        }
    }

    clip_field(&mut records, |r| &mut r.top_speed_kmh);
    clip_field(&mut records, |r| &mut r.acceleration_0_100_s);
    clip_field(&mut records, |r| &mut r.battery_capacity_kwh);
    clip_field(&mut records, |r| &mut r.efficiency_wh_per_km);
    clip_field(&mut records, |r| &mut r.range_km);
    clip_field(&mut records, |r| &mut r.fast_charging_power_kw_dc);

    Stage1Output { records, dropped }
}

/// Clips one feature column to [Q1 - 1.5*IQR, Q3 + 1.5*IQR]. Applied per
/// column, independent of the other features of a record.
fn clip_field(records: &mut [VehicleRecord], field: fn(&mut VehicleRecord) -> &mut f64) {
    if records.is_empty() {
        return;
    }
    let values: Vec<f64> = records.iter_mut().map(|r| *field(r)).collect();
    let q1 = percentile_linear(&values, 25.0);
    let q3 = percentile_linear(&values, 75.0);
    let iqr = q3 - q1;
    let lo = q1 - 1.5 * iqr;
    let hi = q3 + 1.5 * iqr;
    for record in records.iter_mut() {
        let slot = field(record);
        *slot = slot.clamp(lo, hi);
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_clean.rs"]
mod tests;
