//! Saturating attraction curves.
//!
//! Two scalar, piecewise-quadratic functions shared by the objective model.
//! Both are continuous at their breakpoint, monotone non-decreasing on the
//! quadratic piece, and flat past saturation. The breakpoints are literal
//! clamps, not smoothed transitions.

/// Utility level at which a site's attraction contribution saturates.
pub const UTILITY_SATURATION: f64 = 100.0;

/// Attraction contribution of a fully saturated site.
pub const SITE_ATTRACTION_CAP: f64 = 40.0;

/// Total-attraction level past which the capture probability is 1.
pub const ATTRACTION_SATURATION: f64 = 133.0;

/// A site's attraction contribution as a function of its accumulated utility.
///
/// `-0.004·u² + 0.8·u` for `u ≤ 100`, a concave parabola peaking at
/// `u = 100` with value 40; the flat cap 40 beyond that.
///
/// # Examples
///
/// ```
/// use facloc::attraction::site_attraction;
///
/// assert_eq!(site_attraction(0.0), 0.0);
/// assert_eq!(site_attraction(100.0), 40.0);
/// assert_eq!(site_attraction(250.0), 40.0);
/// ```
pub fn site_attraction(utility: f64) -> f64 {
    if utility > UTILITY_SATURATION {
        SITE_ATTRACTION_CAP
    } else {
        -0.004 * utility * utility + 0.8 * utility
    }
}

/// Probability of capturing a customer's demand as a function of the total
/// market attraction the customer perceives.
///
/// `-0.000015·x² + 0.0095·x` for `x ≤ 133`; the flat cap 1 beyond that.
///
/// # Examples
///
/// ```
/// use facloc::attraction::capture_probability;
///
/// assert_eq!(capture_probability(0.0), 0.0);
/// assert!(capture_probability(40.0) < 1.0);
/// assert_eq!(capture_probability(500.0), 1.0);
/// ```
pub fn capture_probability(total_attraction: f64) -> f64 {
    if total_attraction > ATTRACTION_SATURATION {
        1.0
    } else {
        -0.000015 * total_attraction * total_attraction + 0.0095 * total_attraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_attraction_at_breakpoint() {
        // The quadratic piece reaches exactly 40 at u = 100, so both sides
        // of the breakpoint agree.
        assert!((site_attraction(100.0) - 40.0).abs() < 1e-12);
        assert_eq!(site_attraction(100.0 + 1e-9), 40.0);
    }

    #[test]
    fn test_site_attraction_flat_past_saturation() {
        for u in [100.1, 150.0, 1e6] {
            assert_eq!(site_attraction(u), 40.0);
        }
    }

    #[test]
    fn test_site_attraction_non_decreasing() {
        let mut prev = site_attraction(0.0);
        for step in 1..=1200 {
            let u = step as f64 * 0.1;
            let cur = site_attraction(u);
            assert!(cur >= prev - 1e-12, "decreased at u={u}");
            prev = cur;
        }
    }

    #[test]
    fn test_capture_probability_known_values() {
        // G(40) = -0.000015·1600 + 0.38 = 0.356
        assert!((capture_probability(40.0) - 0.356).abs() < 1e-12);
        assert_eq!(capture_probability(134.0), 1.0);
    }

    #[test]
    fn test_capture_probability_near_breakpoint() {
        // The quadratic piece is ~0.998 at the clamp and exactly 1 at
        // x = 400/3; the cap keeps the function within [0, 1].
        let at_clamp = capture_probability(ATTRACTION_SATURATION);
        assert!(at_clamp > 0.99 && at_clamp <= 1.0);
        assert!((capture_probability(400.0 / 3.0) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_capture_probability_bounded() {
        for x in [0.0, 10.0, 50.0, 100.0, 133.0, 200.0, 1e9] {
            let p = capture_probability(x);
            assert!((0.0..=1.0).contains(&p), "G({x}) = {p} out of bounds");
        }
    }

    #[test]
    fn test_capture_probability_non_decreasing() {
        let mut prev = capture_probability(0.0);
        for step in 1..=1500 {
            let x = step as f64 * 0.1;
            let cur = capture_probability(x);
            assert!(cur >= prev - 1e-12, "decreased at x={x}");
            prev = cur;
        }
    }
}
