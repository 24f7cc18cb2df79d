/// Soil pH band in which most field crops do best (inclusive)
pub const OPTIMAL_PH_MIN: f64 = 6.0;
pub const OPTIMAL_PH_MAX: f64 = 7.5;

/// Outside these bounds (exclusive) the soil is too acidic or alkaline
pub const EXTREME_PH_LOW: f64 = 5.0;
pub const EXTREME_PH_HIGH: f64 = 8.5;

/// Round to a fixed number of decimal places.
///
/// Rounds the exact binary value, so 5.175 (stored as 5.17499...) becomes
/// 5.17. Scaling by a power of ten first would land on the tie and round up.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value)
        .parse()
        .unwrap_or(value)
}

pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

pub fn is_optimal_ph(ph: f64) -> bool {
    (OPTIMAL_PH_MIN..=OPTIMAL_PH_MAX).contains(&ph)
}

pub fn is_extreme_ph(ph: f64) -> bool {
    ph < EXTREME_PH_LOW || ph > EXTREME_PH_HIGH
}

/// Format a [0, 1] score as a percentage with one decimal place
pub fn format_percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}
