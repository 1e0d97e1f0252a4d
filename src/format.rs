//! Display formatting for durations, paces and distances.

/// Round to whole seconds, treating negative or non-finite input as zero.
fn whole_seconds(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as u64
    } else {
        0
    }
}

/// Format seconds as `"1h 30m 45s"`, dropping hours when zero and minutes
/// when both hours and minutes are zero.
pub fn format_duration(seconds: f64) -> String {
    let total = whole_seconds(seconds);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 || hours > 0 {
        parts.push(format!("{}m", minutes));
    }
    parts.push(format!("{}s", secs));
    parts.join(" ")
}

/// Format seconds per kilometer as `"M:SS min/km"`.
pub fn format_pace(secs_per_km: f64) -> String {
    let total = whole_seconds(secs_per_km);
    format!("{}:{:02} min/km", total / 60, total % 60)
}

pub fn format_distance(km: f64) -> String {
    format!("{:.2} km", km)
}
