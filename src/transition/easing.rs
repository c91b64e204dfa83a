// ============================================================================
// EASING FUNCTIONS for layout transitions
// ============================================================================

/// Exponential ease-in-out: nearly still at both ends, very fast through the middle
///
/// Pinned to exactly 0 and 1 at the endpoints so a finished tween lands on
/// its target.
pub fn ease_in_out_expo(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else if t < 0.5 {
        0.5 * 1024.0_f32.powf(2.0 * t - 1.0)
    } else {
        0.5 * (2.0 - 2.0_f32.powf(-10.0 * (2.0 * t - 1.0)))
    }
}
