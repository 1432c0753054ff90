use tracing::warn;

use crate::model::records::VehicleRecord;
use crate::model::weights::ScoreWeights;

/// The three composite scores as parallel vectors, index-aligned with the
/// cleaned record set.
#[derive(Debug, Clone)]
pub struct CompositeScores {
    pub speed: Vec<f64>,
    pub battery: Vec<f64>,
    pub charging: Vec<f64>,
}

/// Scoring half of the feature normalizer. Every ratio term is relative to
/// the min/max of the clipped batch, so scores rank vehicles within this
/// batch rather than on an absolute scale.
pub fn run_stage2(records: &[VehicleRecord], weights: &ScoreWeights) -> CompositeScores {
    let n = records.len();
    let mut scores = CompositeScores {
        speed: Vec::with_capacity(n),
        battery: Vec::with_capacity(n),
        charging: Vec::with_capacity(n),
    };
    if n == 0 {
        return scores;
    }

    let top_speed = column_bounds(records, |r| r.top_speed_kmh, "top_speed_kmh");
    let accel = column_bounds(records, |r| r.acceleration_0_100_s, "acceleration_0_100_s");
    let capacity = column_bounds(records, |r| r.battery_capacity_kwh, "battery_capacity_kWh");
    let efficiency = column_bounds(records, |r| r.efficiency_wh_per_km, "efficiency_wh_per_km");
    let range = column_bounds(records, |r| r.range_km, "range_km");
    let fast_charge = column_bounds(
        records,
        |r| r.fast_charging_power_kw_dc,
        "fast_charging_power_kw_dc",
    );

    for record in records {
        let speed = weights.speed_top_speed * top_speed.share_of_max(record.top_speed_kmh)
            + weights.speed_acceleration * accel.inverted_share(record.acceleration_0_100_s);
        let battery = weights.battery_capacity * capacity.share_of_max(record.battery_capacity_kwh)
            + weights.battery_range * range.share_of_max(record.range_km)
            + weights.battery_efficiency * efficiency.inverted_share(record.efficiency_wh_per_km);
        let charging = weights.charging_power
            * fast_charge.share_of_max(record.fast_charging_power_kw_dc)
            + weights.charging_capacity * capacity.share_of_max(record.battery_capacity_kwh);

        scores.speed.push(100.0 * speed);
        scores.battery.push(100.0 * battery);
        scores.charging.push(100.0 * charging);
    }

    scores
}

#[derive(Debug, Clone, Copy)]
struct ColumnBounds {
    min: f64,
    max: f64,
}

impl ColumnBounds {
    /// value / max of the batch. A non-positive max means the whole column
    /// ties at the top, so the term contributes its full weight.
    fn share_of_max(&self, value: f64) -> f64 {
        if self.max > 0.0 { value / self.max } else { 1.0 }
    }

    /// (max - value) / (max - min), for features where lower is better. A
    /// zero-spread column ties at the top the same way.
    fn inverted_share(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 { (self.max - value) / span } else { 1.0 }
    }
}

fn column_bounds(
    records: &[VehicleRecord],
    value: fn(&VehicleRecord) -> f64,
    name: &'static str,
) -> ColumnBounds {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for record in records {
        let v = value(record);
        min = min.min(v);
        max = max.max(v);
    }
    if min == max {
        warn!(column = name, "feature column has zero spread across the batch");
    }
    ColumnBounds { min, max }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_scores.rs"]
mod tests;
