/// All tunable constants of the scoring pipeline in one profile.
#[derive(Debug, Clone)]
pub struct ScoreWeights {
    pub speed_top_speed: f64,
    pub speed_acceleration: f64,
    pub battery_capacity: f64,
    pub battery_range: f64,
    pub battery_efficiency: f64,
    pub charging_power: f64,
    pub charging_capacity: f64,
    /// Percentile of each score distribution a vehicle must reach to
    /// qualify for that specialized group.
    pub cutoff_percentile: f64,
}

impl ScoreWeights {
    pub fn default_v1() -> Self {
        Self {
            speed_top_speed: 0.7,
            speed_acceleration: 0.3,
            battery_capacity: 0.4,
            battery_range: 0.4,
            battery_efficiency: 0.2,
            charging_power: 0.8,
            charging_capacity: 0.2,
            cutoff_percentile: 67.0,
        }
    }
}
