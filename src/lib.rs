//! Scoring engine behind the EV recommendation dashboard: cleans a tabular
//! spec dataset, derives three composite scores per vehicle, buckets each
//! vehicle into one affinity group, and selects top candidates per group.

pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod stats;

pub use model::groups::{Group, GroupProfile, ScoreKind, profile_for};
pub use model::records::{RawVehicleRecord, ScoredRecord, VehicleRecord};
pub use model::weights::ScoreWeights;
pub use pipeline::stage3_assign::ScoreCutoffs;
pub use pipeline::stage4_select::top_n;

use pipeline::stage1_clean::run_stage1;
use pipeline::stage2_scores::run_stage2;
use pipeline::stage3_assign::run_stage3;

/// Result of one scoring pass over a dataset snapshot.
#[derive(Debug, Clone)]
pub struct ScoringOutcome {
    pub records: Vec<ScoredRecord>,
    pub cutoffs: ScoreCutoffs,
    pub dropped: usize,
}

/// The full pipeline with default weights: clean, score, assign groups.
pub fn score_and_group(raw: &[RawVehicleRecord]) -> Vec<ScoredRecord> {
    score_and_group_with(raw, &ScoreWeights::default_v1()).records
}

/// The full pipeline. Pure and stateless: the same snapshot and weights
/// always produce byte-identical output.
pub fn score_and_group_with(raw: &[RawVehicleRecord], weights: &ScoreWeights) -> ScoringOutcome {
    let stage1 = run_stage1(raw);
    let scores = run_stage2(&stage1.records, weights);
    let stage3 = run_stage3(&scores, weights.cutoff_percentile);

    let records = stage1
        .records
        .into_iter()
        .enumerate()
        .map(|(i, vehicle)| ScoredRecord {
            vehicle,
            speed_score: scores.speed[i],
            battery_score: scores.battery[i],
            charging_score: scores.charging[i],
            group: stage3.groups[i],
        })
        .collect();

    ScoringOutcome {
        records,
        cutoffs: stage3.cutoffs,
        dropped: stage1.dropped,
    }
}

/// Static display copy lookup by group name. Never fails: unknown names and
/// the catch-all `general` group map to the default (empty) profile.
pub fn group_profile(name: &str) -> GroupProfile {
    Group::parse(name)
        .map(profile_for)
        .unwrap_or_default()
}
