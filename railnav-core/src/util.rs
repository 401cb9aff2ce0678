//! Small numeric and formatting helpers

/// Rounds `value` to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Human readable distance: meters below 1 km, otherwise kilometers with
/// one decimal
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{:.0} m", distance_km * 1000.0)
    } else {
        format!("{distance_km:.1} km")
    }
}
