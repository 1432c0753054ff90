pub mod json;
pub mod text;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::ScoringOutcome;
use crate::model::groups::{Group, GroupProfile, ScoreKind, profile_for};
use crate::model::records::{ScoredRecord, VehicleRecord};
use crate::model::weights::ScoreWeights;
use crate::pipeline::stage3_assign::ScoreCutoffs;
use crate::pipeline::stage4_select::top_n;
use crate::stats::{mean, median, percentile_linear};

#[derive(Debug, Clone, Copy)]
pub enum ReportMode {
    Text,
    Json,
    Both,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Distribution of one score dimension over the scored population.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreStats {
    pub name: &'static str,
    pub mean: f64,
    pub median: f64,
    pub p90: f64,
}

/// Mean value of one headline feature within a group.
#[derive(Debug, Clone, Serialize)]
pub struct HeadlineStat {
    pub name: &'static str,
    pub mean: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupStat {
    pub group: Group,
    pub count: usize,
    pub fraction: f64,
    /// Mean of the group's own score; absent for the catch-all group.
    pub mean_score: Option<f64>,
    pub headline: Vec<HeadlineStat>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopEntry {
    pub rank: usize,
    pub brand: String,
    pub model: String,
    pub score: f64,
}

/// One specialized group's recommendation block: display copy plus the
/// top-ranked vehicles.
#[derive(Debug, Clone, Serialize)]
pub struct GroupSection {
    pub group: Group,
    pub profile: GroupProfile,
    pub top: Vec<TopEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool_name: String,
    pub tool_version: String,
    pub n_rows_raw: usize,
    pub n_rows_scored: usize,
    pub n_rows_dropped: usize,
    pub cutoff_percentile: f64,
    pub cutoffs: ScoreCutoffs,
    pub score_stats: Vec<ScoreStats>,
    pub group_stats: Vec<GroupStat>,
    pub sections: Vec<GroupSection>,
}

pub fn build_summary(
    outcome: &ScoringOutcome,
    n_rows_raw: usize,
    weights: &ScoreWeights,
    top_limit: usize,
) -> SummaryData {
    let records = &outcome.records;

    let score_stats = ScoreKind::ALL
        .iter()
        .map(|&kind| {
            let values: Vec<f64> = records.iter().map(|r| r.score(kind)).collect();
            ScoreStats {
                name: kind.as_str(),
                mean: mean(&values),
                median: median(&values),
                p90: percentile_linear(&values, 90.0),
            }
        })
        .collect();

    let group_stats = [Group::Speed, Group::Battery, Group::Charging, Group::General]
        .iter()
        .map(|&group| build_group_stat(records, group))
        .collect();

    let sections = Group::SPECIALIZED
        .iter()
        .filter_map(|&group| group.score_kind().map(|kind| (group, kind)))
        .map(|(group, kind)| {
            let top = top_n(records, group, kind, top_limit)
                .into_iter()
                .enumerate()
                .map(|(i, record)| TopEntry {
                    rank: i + 1,
                    brand: record.vehicle.brand.clone(),
                    model: record.vehicle.model.clone(),
                    score: record.score(kind),
                })
                .collect();
            GroupSection {
                group,
                profile: profile_for(group),
                top,
            }
        })
        .collect();

    SummaryData {
        tool_name: "ev-advisor".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        n_rows_raw,
        n_rows_scored: records.len(),
        n_rows_dropped: outcome.dropped,
        cutoff_percentile: weights.cutoff_percentile,
        cutoffs: outcome.cutoffs,
        score_stats,
        group_stats,
        sections,
    }
}

fn build_group_stat(records: &[ScoredRecord], group: Group) -> GroupStat {
    let members: Vec<&ScoredRecord> = records.iter().filter(|r| r.group == group).collect();
    let count = members.len();
    let fraction = if records.is_empty() {
        0.0
    } else {
        count as f64 / records.len() as f64
    };

    let mean_score = group.score_kind().map(|kind| {
        let values: Vec<f64> = members.iter().map(|r| r.score(kind)).collect();
        mean(&values)
    });

    let headline = headline_fields(group)
        .into_iter()
        .map(|(name, value)| {
            let values: Vec<f64> = members.iter().map(|r| value(&r.vehicle)).collect();
            HeadlineStat {
                name,
                mean: mean(&values),
            }
        })
        .collect();

    GroupStat {
        group,
        count,
        fraction,
        mean_score,
        headline,
    }
}

type FeatureGetter = fn(&VehicleRecord) -> f64;

/// The features shown for each group's statistics, mirroring what each group
/// is selected on.
fn headline_fields(group: Group) -> Vec<(&'static str, FeatureGetter)> {
    match group {
        Group::Speed => vec![
            ("top_speed_kmh", (|r| r.top_speed_kmh) as FeatureGetter),
            ("acceleration_0_100_s", |r| r.acceleration_0_100_s),
        ],
        Group::Battery => vec![
            ("battery_capacity_kWh", (|r| r.battery_capacity_kwh) as FeatureGetter),
            ("range_km", |r| r.range_km),
            ("efficiency_wh_per_km", |r| r.efficiency_wh_per_km),
        ],
        Group::Charging => vec![
            (
                "fast_charging_power_kw_dc",
                (|r| r.fast_charging_power_kw_dc) as FeatureGetter,
            ),
            ("battery_capacity_kWh", |r| r.battery_capacity_kwh),
        ],
        Group::General => Vec::new(),
    }
}

pub fn write_reports(data: &SummaryData, out_dir: &Path, mode: ReportMode) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    if matches!(mode, ReportMode::Text | ReportMode::Both) {
        let path = out_dir.join("summary.txt");
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(text::render_summary_text(data).as_bytes())?;
        writer.flush()?;
    }
    if matches!(mode, ReportMode::Json | ReportMode::Both) {
        let path = out_dir.join("summary.json");
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(json::render_summary_json(data)?.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    Ok(())
}

pub fn format_f64_1(v: f64) -> String {
    format!("{:.1}", v)
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}
