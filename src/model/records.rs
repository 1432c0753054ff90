use serde::{Deserialize, Serialize};

use crate::model::groups::{Group, ScoreKind};

/// One CSV row as ingested. Feature cells may be empty; identity must not be.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVehicleRecord {
    pub brand: String,
    pub model: String,
    pub top_speed_kmh: Option<f64>,
    pub acceleration_0_100_s: Option<f64>,
    #[serde(rename = "battery_capacity_kWh")]
    pub battery_capacity_kwh: Option<f64>,
    pub efficiency_wh_per_km: Option<f64>,
    pub range_km: Option<f64>,
    pub fast_charging_power_kw_dc: Option<f64>,
}

/// A vehicle with all six features present and finite. Only the cleaning
/// stage constructs these.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleRecord {
    pub brand: String,
    pub model: String,
    pub top_speed_kmh: f64,
    pub acceleration_0_100_s: f64,
    #[serde(rename = "battery_capacity_kWh")]
    pub battery_capacity_kwh: f64,
    pub efficiency_wh_per_km: f64,
    pub range_km: f64,
    pub fast_charging_power_kw_dc: f64,
}

impl VehicleRecord {
    pub fn from_raw(raw: &RawVehicleRecord) -> Option<Self> {
        let top_speed_kmh = finite(raw.top_speed_kmh)?;
        let acceleration_0_100_s = finite(raw.acceleration_0_100_s)?;
        let battery_capacity_kwh = finite(raw.battery_capacity_kwh)?;
        let efficiency_wh_per_km = finite(raw.efficiency_wh_per_km)?;
        let range_km = finite(raw.range_km)?;
        let fast_charging_power_kw_dc = finite(raw.fast_charging_power_kw_dc)?;
        Some(Self {
            brand: raw.brand.clone(),
            model: raw.model.clone(),
            top_speed_kmh,
            acceleration_0_100_s,
            battery_capacity_kwh,
            efficiency_wh_per_km,
            range_km,
            fast_charging_power_kw_dc,
        })
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// A vehicle annotated with the three composite scores and its group.
/// Read-only after the scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub vehicle: VehicleRecord,
    pub speed_score: f64,
    pub battery_score: f64,
    pub charging_score: f64,
    pub group: Group,
}

impl ScoredRecord {
    pub fn score(&self, kind: ScoreKind) -> f64 {
        match kind {
            ScoreKind::Speed => self.speed_score,
            ScoreKind::Battery => self.battery_score,
            ScoreKind::Charging => self.charging_score,
        }
    }
}
