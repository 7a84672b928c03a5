/// Quadratic ease-in-out over `[0, 1]`
///
/// Input is clamped, so the curve always ends exactly at 1.
pub fn ease_in_out(progress: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Linear interpolation from `start` to `end`
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}
