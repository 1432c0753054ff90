use super::*;
use crate::model::records::VehicleRecord;

fn scored(model: &str, group: Group, scores: [f64; 3]) -> ScoredRecord {
    ScoredRecord {
        vehicle: VehicleRecord {
            brand: "Brand".to_string(),
            model: model.to_string(),
            top_speed_kmh: 150.0,
            acceleration_0_100_s: 7.0,
            battery_capacity_kwh: 60.0,
            efficiency_wh_per_km: 160.0,
            range_km: 400.0,
            fast_charging_power_kw_dc: 100.0,
        },
        speed_score: scores[0],
        battery_score: scores[1],
        charging_score: scores[2],
        group,
    }
}

#[test]
fn test_returns_all_members_when_fewer_than_n() {
    let records = vec![
        scored("A", Group::Speed, [70.0, 0.0, 0.0]),
        scored("B", Group::Speed, [90.0, 0.0, 0.0]),
        scored("C", Group::General, [95.0, 0.0, 0.0]),
        scored("D", Group::Speed, [80.0, 0.0, 0.0]),
    ];
    let top = top_n(&records, Group::Speed, ScoreKind::Speed, 5);
    assert_eq!(top.len(), 3);
    let models: Vec<&str> = top.iter().map(|r| r.vehicle.model.as_str()).collect();
    assert_eq!(models, vec!["B", "D", "A"]);
}

#[test]
fn test_truncates_to_n() {
    let records = vec![
        scored("A", Group::Battery, [0.0, 40.0, 0.0]),
        scored("B", Group::Battery, [0.0, 90.0, 0.0]),
        scored("C", Group::Battery, [0.0, 70.0, 0.0]),
        scored("D", Group::Battery, [0.0, 80.0, 0.0]),
    ];
    let top = top_n(&records, Group::Battery, ScoreKind::Battery, 2);
    let models: Vec<&str> = top.iter().map(|r| r.vehicle.model.as_str()).collect();
    assert_eq!(models, vec!["B", "D"]);
}

#[test]
fn test_empty_group_yields_empty() {
    let records = vec![scored("A", Group::Speed, [70.0, 0.0, 0.0])];
    assert!(top_n(&records, Group::Charging, ScoreKind::Charging, 5).is_empty());
    assert!(top_n(&[], Group::Speed, ScoreKind::Speed, 5).is_empty());
}

#[test]
fn test_equal_scores_keep_dataset_order() {
    let records = vec![
        scored("First", Group::Charging, [0.0, 0.0, 88.0]),
        scored("Second", Group::Charging, [0.0, 0.0, 88.0]),
    ];
    let top = top_n(&records, Group::Charging, ScoreKind::Charging, 5);
    let models: Vec<&str> = top.iter().map(|r| r.vehicle.model.as_str()).collect();
    assert_eq!(models, vec!["First", "Second"]);
}

#[test]
fn test_orders_by_requested_score() {
    let records = vec![
        scored("A", Group::General, [90.0, 10.0, 0.0]),
        scored("B", Group::General, [10.0, 90.0, 0.0]),
    ];
    let by_battery = top_n(&records, Group::General, ScoreKind::Battery, 5);
    assert_eq!(by_battery[0].vehicle.model, "B");
    let by_speed = top_n(&records, Group::General, ScoreKind::Speed, 5);
    assert_eq!(by_speed[0].vehicle.model, "A");
}
