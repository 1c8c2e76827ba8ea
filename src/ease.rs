/// Interpolation and easing helpers shared by every scene.
///
/// All functions are total over f64 and perform no input validation;
/// callers clamp upstream when a bounded result matters. Easing curves
/// assume `t` in \[0, 1\] and are not meaningful outside that domain.

/// Linear interpolation. `factor` is not clamped, so values outside
/// \[0, 1\] extrapolate past the endpoints.
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor
}

/// Remap `value` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// Extrapolates for values outside the input range. A degenerate input
/// range (`in_min == in_max`) divides by zero and yields a non-finite
/// result; supplying a non-degenerate range is the caller's precondition.
#[inline]
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + ((value - in_min) * (out_max - out_min)) / (in_max - in_min)
}

/// Clamp `value` into `[min, max]`.
///
/// Evaluates as `min(max(value, min), max)`. When `min > max` this
/// returns the `max` bound regardless of `value`; the stdlib
/// `f64::clamp` asserts on that case, which is why it is not used here.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Decelerating quadratic ease-out.
#[inline]
pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Symmetric accelerate-then-decelerate quadratic.
#[inline]
pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Cubic ease-out; flatter near `t = 1` than the quadratic version.
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let u = t - 1.0;
    u * u * u + 1.0
}
