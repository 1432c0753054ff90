use crate::model::groups::{Group, ScoreKind};
use crate::model::records::ScoredRecord;

/// Up to `n` members of `group`, ordered by `score` descending. The sort is
/// stable, so equal scores keep dataset order. An empty or absent group
/// yields an empty vector; callers treat that as "nothing to display".
pub fn top_n(scored: &[ScoredRecord], group: Group, score: ScoreKind, n: usize) -> Vec<ScoredRecord> {
    let mut members: Vec<ScoredRecord> = scored
        .iter()
        .filter(|record| record.group == group)
        .cloned()
        .collect();
    members.sort_by(|a, b| {
        b.score(score)
            .partial_cmp(&a.score(score))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    members.truncate(n);
    members
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_select.rs"]
mod tests;
