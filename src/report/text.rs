use crate::model::groups::Group;
use crate::report::{GroupSection, SummaryData, format_f64_1, format_f64_3};

pub fn render_summary_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("EV Affinity Group Report\n");
    out.push_str("========================\n\n");

    out.push_str("1. Dataset\n");
    out.push_str(&format!(
        "Rows read: {}  scored: {}  dropped: {}\n",
        data.n_rows_raw, data.n_rows_scored, data.n_rows_dropped
    ));
    out.push_str(&format!(
        "Cutoff percentile: {}\n",
        format_f64_1(data.cutoff_percentile)
    ));
    out.push_str(&format!(
        "Cutoffs: speed={} battery={} charging={}\n\n",
        format_f64_1(data.cutoffs.speed),
        format_f64_1(data.cutoffs.battery),
        format_f64_1(data.cutoffs.charging)
    ));

    out.push_str("2. Group sizes\n");
    for stat in &data.group_stats {
        out.push_str(&format!(
            "{}: {} ({})\n",
            stat.group,
            stat.count,
            format_f64_3(stat.fraction)
        ));
    }
    out.push('\n');

    out.push_str("3. Score distributions\n");
    for stat in &data.score_stats {
        out.push_str(&format!(
            "{}: mean={} median={} p90={}\n",
            stat.name,
            format_f64_1(stat.mean),
            format_f64_1(stat.median),
            format_f64_1(stat.p90)
        ));
    }
    out.push('\n');

    out.push_str("4. Group statistics\n");
    for stat in &data.group_stats {
        if stat.group == Group::General || stat.count == 0 {
            continue;
        }
        let mean_score = stat.mean_score.unwrap_or(0.0);
        out.push_str(&format!(
            "{} (mean score {}):\n",
            stat.group,
            format_f64_1(mean_score)
        ));
        for headline in &stat.headline {
            out.push_str(&format!(
                "  mean {}: {}\n",
                headline.name,
                format_f64_1(headline.mean)
            ));
        }
    }
    out.push('\n');

    out.push_str("5. Recommendations\n");
    for section in &data.sections {
        render_section(&mut out, section);
    }

    out
}

fn render_section(out: &mut String, section: &GroupSection) {
    out.push_str(&format!("== {} ==\n", section.profile.title));
    out.push_str(&format!("{}\n", section.profile.subtitle));
    out.push_str(&format!("{}\n", section.profile.description));
    out.push_str(&format!("Recommended for: {}\n", section.profile.target));
    if section.top.is_empty() {
        out.push_str("No vehicles in this group.\n\n");
        return;
    }
    for entry in &section.top {
        out.push_str(&format!(
            "{}. {} {} (score {})\n",
            entry.rank,
            entry.brand,
            entry.model,
            format_f64_1(entry.score)
        ));
    }
    out.push('\n');
}
