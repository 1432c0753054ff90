use super::*;

fn scores(speed: Vec<f64>, battery: Vec<f64>, charging: Vec<f64>) -> CompositeScores {
    CompositeScores {
        speed,
        battery,
        charging,
    }
}

#[test]
fn test_cutoffs_are_percentiles() {
    let s = scores(
        vec![10.0, 50.0, 90.0],
        vec![10.0, 20.0, 95.0],
        vec![15.0, 20.0, 99.0],
    );
    let out = run_stage3(&s, 67.0);
    assert!((out.cutoffs.speed - 63.6).abs() < 1e-9);
    assert!((out.cutoffs.battery - 45.5).abs() < 1e-9);
    assert!((out.cutoffs.charging - 46.86).abs() < 1e-9);
}

#[test]
fn test_each_record_assigned_its_strong_dimension() {
    let s = scores(
        vec![100.0, 0.0, 0.0, 0.0],
        vec![0.0, 100.0, 0.0, 0.0],
        vec![0.0, 0.0, 100.0, 0.0],
    );
    let out = run_stage3(&s, 67.0);
    assert_eq!(
        out.groups,
        vec![Group::Speed, Group::Battery, Group::Charging, Group::General]
    );
}

#[test]
fn test_highest_qualifying_score_wins() {
    // record 0 qualifies for both speed and battery; battery is higher
    let s = scores(
        vec![70.0, 60.0, 0.0],
        vec![90.0, 0.0, 60.0],
        vec![0.0, 0.0, 0.0],
    );
    let out = run_stage3(&s, 67.0);
    assert_eq!(out.groups[0], Group::Battery);
    assert_eq!(out.groups[1], Group::General);
    assert_eq!(out.groups[2], Group::General);
}

#[test]
fn test_equal_scores_break_to_speed() {
    let s = scores(
        vec![80.0, 10.0, 10.0],
        vec![80.0, 10.0, 10.0],
        vec![80.0, 10.0, 10.0],
    );
    let out = run_stage3(&s, 67.0);
    assert_eq!(out.groups[0], Group::Speed);
}

#[test]
fn test_identical_population_degrades_to_general() {
    let s = scores(vec![50.0; 4], vec![50.0; 4], vec![50.0; 4]);
    let out = run_stage3(&s, 67.0);
    assert!(out.groups.iter().all(|&g| g == Group::General));
}

#[test]
fn test_single_record_is_general() {
    let s = scores(vec![100.0], vec![100.0], vec![100.0]);
    let out = run_stage3(&s, 67.0);
    assert_eq!(out.groups, vec![Group::General]);
}

#[test]
fn test_raising_cutoff_never_grows_a_group() {
    let s = scores(
        (1..=10).map(|i| (i * 10) as f64).collect(),
        (1..=10).rev().map(|i| (i * 10) as f64).collect(),
        (1..=10).map(|i| (i * 7) as f64).collect(),
    );
    let lenient = run_stage3(&s, 67.0);
    let strict = run_stage3(&s, 90.0);
    for group in Group::SPECIALIZED {
        let count_lenient = lenient.groups.iter().filter(|&&g| g == group).count();
        let count_strict = strict.groups.iter().filter(|&&g| g == group).count();
        assert!(
            count_strict <= count_lenient,
            "{group}: {count_strict} > {count_lenient}"
        );
    }
}

#[test]
fn test_empty_population() {
    let out = run_stage3(&scores(vec![], vec![], vec![]), 67.0);
    assert!(out.groups.is_empty());
}

#[test]
fn test_determinism() {
    let s = scores(
        vec![12.0, 88.0, 43.0, 67.0],
        vec![55.0, 31.0, 90.0, 12.0],
        vec![70.0, 70.0, 10.0, 95.0],
    );
    let a = run_stage3(&s, 67.0);
    let b = run_stage3(&s, 67.0);
    assert_eq!(a.groups, b.groups);
    assert_eq!(a.cutoffs.speed.to_bits(), b.cutoffs.speed.to_bits());
    assert_eq!(a.cutoffs.battery.to_bits(), b.cutoffs.battery.to_bits());
    assert_eq!(a.cutoffs.charging.to_bits(), b.cutoffs.charging.to_bits());
}
