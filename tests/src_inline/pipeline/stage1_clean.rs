use super::*;
use crate::model::records::RawVehicleRecord;

fn raw(features: [Option<f64>; 6]) -> RawVehicleRecord {
    RawVehicleRecord {
        brand: "Brand".to_string(),
        model: "Model".to_string(),
        top_speed_kmh: features[0],
        acceleration_0_100_s: features[1],
        battery_capacity_kwh: features[2],
        efficiency_wh_per_km: features[3],
        range_km: features[4],
        fast_charging_power_kw_dc: features[5],
    }
}

fn complete(features: [f64; 6]) -> RawVehicleRecord {
    raw(features.map(Some))
}

#[test]
fn test_drops_rows_with_missing_features() {
    let rows = vec![
        complete([150.0, 7.0, 60.0, 160.0, 400.0, 100.0]),
        raw([
            Some(150.0),
            None,
            Some(60.0),
            Some(160.0),
            Some(400.0),
            Some(100.0),
        ]),
        complete([160.0, 6.5, 70.0, 150.0, 450.0, 120.0]),
    ];
    let out = run_stage1(&rows);
    assert_eq!(out.records.len(), 2);
    assert_eq!(out.dropped, 1);
}

#[test]
fn test_clips_high_outlier_to_fence() {
    // top speeds [10, 11, 12, 13, 100]: Q1=11, Q3=13, fence hi = 13 + 3 = 16
    let rows: Vec<RawVehicleRecord> = [10.0, 11.0, 12.0, 13.0, 100.0]
        .iter()
        .map(|&ts| complete([ts, 7.0, 60.0, 160.0, 400.0, 100.0]))
        .collect();
    let out = run_stage1(&rows);
    assert_eq!(out.records[4].top_speed_kmh, 16.0);
    assert_eq!(out.records[0].top_speed_kmh, 10.0);
    // constant columns are untouched
    for record in &out.records {
        assert_eq!(record.range_km, 400.0);
    }
}

#[test]
fn test_clips_low_outlier_to_fence() {
    // efficiencies [1, 100, 101, 102, 103]: Q1=100, Q3=102, fence lo = 97
    let rows: Vec<RawVehicleRecord> = [1.0, 100.0, 101.0, 102.0, 103.0]
        .iter()
        .map(|&eff| complete([150.0, 7.0, 60.0, eff, 400.0, 100.0]))
        .collect();
    let out = run_stage1(&rows);
    assert_eq!(out.records[0].efficiency_wh_per_km, 97.0);
    assert_eq!(out.records[4].efficiency_wh_per_km, 103.0);
}

#[test]
fn test_inlier_values_unchanged() {
    let rows: Vec<RawVehicleRecord> = [140.0, 150.0, 160.0, 170.0]
        .iter()
        .map(|&ts| complete([ts, 7.0, 60.0, 160.0, 400.0, 100.0]))
        .collect();
    let out = run_stage1(&rows);
    let speeds: Vec<f64> = out.records.iter().map(|r| r.top_speed_kmh).collect();
    assert_eq!(speeds, vec![140.0, 150.0, 160.0, 170.0]);
}

#[test]
fn test_empty_input() {
    let out = run_stage1(&[]);
    assert!(out.records.is_empty());
    assert_eq!(out.dropped, 0);
}
