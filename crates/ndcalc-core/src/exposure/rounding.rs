//! Decimal rounding for displayed values.

/// Relative slack applied to the scaled value before rounding.
///
/// `1.005` is stored as `1.00499999999999989…`; scaled by 100 it lands a few
/// ULPs below the `.5` boundary. Four machine epsilons is enough to pull such
/// values back onto the boundary without moving any value a user could type.
const ROUNDING_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Round `value` to `decimals` decimal places, half away from zero.
///
/// ```text
/// round_to(1.5311, 2) = 1.53
/// round_to(1.005, 2)  = 1.01
/// round_to(-2.5, 0)   = -3
/// ```
///
/// Non-finite values are returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    let nudged = scaled + scaled.signum() * scaled.abs() * ROUNDING_TOLERANCE;
    // `+ 0.0` folds -0.0 into 0.0 so it never displays as "-0".
    nudged.round() / factor + 0.0
}

/// Whole stops between two EVs that were rounded to two decimals.
///
/// Works in integer hundredths so a difference written as `0.50` rounds to
/// one stop regardless of how far the binary subtraction drifts.
pub fn whole_stops_between(from_ev: f64, to_ev: f64) -> i64 {
    let centi = |ev: f64| (ev * 100.0).round() as i64;
    let diff = centi(from_ev) - centi(to_ev);
    (diff.abs() + 50) / 100 * diff.signum()
}
