use serde::{Deserialize, Serialize};

/// Affinity group labels. Every scored vehicle carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Speed,
    Battery,
    Charging,
    General,
}

impl Group {
    /// The three groups with a score dimension of their own, in evaluation
    /// order. Tie-breaks resolve to the first match in this order.
    pub const SPECIALIZED: [Group; 3] = [Group::Speed, Group::Battery, Group::Charging];

    pub fn as_str(&self) -> &'static str {
        match self {
            Group::Speed => "speed",
            Group::Battery => "battery",
            Group::Charging => "charging",
            Group::General => "general",
        }
    }

    pub fn parse(name: &str) -> Option<Group> {
        let name = name.trim();
        for group in [Group::Speed, Group::Battery, Group::Charging, Group::General] {
            if name.eq_ignore_ascii_case(group.as_str()) {
                return Some(group);
            }
        }
        None
    }

    pub fn score_kind(&self) -> Option<ScoreKind> {
        match self {
            Group::Speed => Some(ScoreKind::Speed),
            Group::Battery => Some(ScoreKind::Battery),
            Group::Charging => Some(ScoreKind::Charging),
            Group::General => None,
        }
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names one of the three composite score dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreKind {
    Speed,
    Battery,
    Charging,
}

impl ScoreKind {
    pub const ALL: [ScoreKind; 3] = [ScoreKind::Speed, ScoreKind::Battery, ScoreKind::Charging];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreKind::Speed => "speed_score",
            ScoreKind::Battery => "battery_score",
            ScoreKind::Charging => "charging_score",
        }
    }

    pub fn group(&self) -> Group {
        match self {
            ScoreKind::Speed => Group::Speed,
            ScoreKind::Battery => Group::Battery,
            ScoreKind::Charging => Group::Charging,
        }
    }
}

impl std::fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display copy for one affinity group. Static data, independent of any
/// dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GroupProfile {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub target: &'static str,
}

const SPEED_PROFILE: GroupProfile = GroupProfile {
    title: "Electric cars for speed enthusiasts",
    subtitle: "Performance EVs with thrilling acceleration and top speed",
    description: "A selection for drivers who put driving fun and sporty \
                  performance first. Powerful motors and strong acceleration \
                  bring the thrill back to the road.",
    target: "Sports-car fans and performance-minded drivers",
};

const BATTERY_PROFILE: GroupProfile = GroupProfile {
    title: "The long-distance travel companion",
    subtitle: "Practical EVs with outstanding range and efficiency",
    description: "For drivers who want to go farther on a single charge at a \
                  lower running cost. Generous battery capacity and excellent \
                  energy efficiency deliver the freedom to travel.",
    target: "Long-distance commuters and cost-conscious travelers",
};

const CHARGING_PROFILE: GroupProfile = GroupProfile {
    title: "Fast-charging convenience",
    subtitle: "EVs that save time with rapid DC charging",
    description: "For busy drivers who want meaningful range from a short \
                  stop. High-power fast charging tops up the battery in \
                  minutes rather than hours.",
    target: "Busy professionals and time-conscious drivers",
};

/// Fixed enumerated mapping from group to display copy. The catch-all
/// `general` group has no copy and maps to the default profile.
pub fn profile_for(group: Group) -> GroupProfile {
    match group {
        Group::Speed => SPEED_PROFILE,
        Group::Battery => BATTERY_PROFILE,
        Group::Charging => CHARGING_PROFILE,
        Group::General => GroupProfile::default(),
    }
}
