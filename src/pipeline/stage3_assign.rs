use serde::Serialize;

use crate::model::groups::Group;
use crate::pipeline::stage2_scores::CompositeScores;
use crate::stats::percentile_linear;

/// Qualification thresholds, one per score dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreCutoffs {
    pub speed: f64,
    pub battery: f64,
    pub charging: f64,
}

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub groups: Vec<Group>,
    pub cutoffs: ScoreCutoffs,
}

/// Group assigner: a vehicle qualifies for every dimension where its score
/// meets that dimension's percentile cutoff, and is assigned the qualifying
/// dimension with the highest score value. Ties resolve in the fixed order
/// speed, battery, charging. No qualification means `general`.
///
/// A dimension whose score population has no spread (single-record batch,
/// all-identical batch) qualifies nobody; such batches come out all-general
/// instead of vacuously passing the whole batch at its own cutoff.
pub fn run_stage3(scores: &CompositeScores, cutoff_percentile: f64) -> Stage3Output {
    let cutoffs = ScoreCutoffs {
        speed: percentile_linear(&scores.speed, cutoff_percentile),
        battery: percentile_linear(&scores.battery, cutoff_percentile),
        charging: percentile_linear(&scores.charging, cutoff_percentile),
    };

    let dimensions = [
        (Group::Speed, &scores.speed, cutoffs.speed),
        (Group::Battery, &scores.battery, cutoffs.battery),
        (Group::Charging, &scores.charging, cutoffs.charging),
    ];
    let live = dimensions.map(|(_, values, _)| has_spread(values));

    let n = scores.speed.len();
    let mut groups = Vec::with_capacity(n);
    for i in 0..n {
        let mut best: Option<(Group, f64)> = None;
        for (d, (group, values, cutoff)) in dimensions.iter().enumerate() {
            if !live[d] {
                continue;
            }
            let value = values[i];
            if value < *cutoff {
                continue;
            }
            // strict > keeps the first dimension on equal scores
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((*group, value)),
            }
        }
        groups.push(best.map(|(group, _)| group).unwrap_or(Group::General));
    }

    Stage3Output { groups, cutoffs }
}

fn has_spread(values: &[f64]) -> bool {
    match values.first() {
        Some(&first) => values.iter().any(|&v| v != first),
        None => false,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_assign.rs"]
mod tests;
