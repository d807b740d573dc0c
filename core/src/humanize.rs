//! Compact magnitude scaling for damage figures
//!
//! Converts a raw value into a `(scaled, suffix)` pair for display, e.g.
//! `1_500_000.0 -> (1.5, "M")`. The scaled value is returned unrounded;
//! display precision is the caller's choice.

/// Magnitude tiers, largest divisor first
const TIERS: &[(f64, &str)] = &[(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Scale `value` into the largest tier whose divisor it reaches.
///
/// Values below the first tier (and zero) pass through with an empty
/// suffix. Negative values are scaled by absolute magnitude with the sign
/// preserved. Lossy by design; not round-trippable through parsing.
pub fn humanize(value: f64) -> (f64, &'static str) {
    let magnitude = value.abs();
    for &(divisor, unit) in TIERS {
        if magnitude >= divisor {
            return (value / divisor, unit);
        }
    }
    (value, "")
}

/// Divisor associated with a suffix returned by [`humanize`], 1.0 for the
/// unscaled tier
pub fn tier_divisor(unit: &str) -> f64 {
    TIERS
        .iter()
        .find(|(_, u)| *u == unit)
        .map_or(1.0, |(d, _)| *d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_thousands() {
        assert_eq!(humanize(1500.0), (1.5, "K"));
        assert_eq!(humanize(1000.0), (1.0, "K"));
    }

    #[test]
    fn below_first_tier_passes_through() {
        assert_eq!(humanize(999.0), (999.0, ""));
        assert_eq!(humanize(1.0), (1.0, ""));
    }

    #[test]
    fn zero_is_unscaled() {
        assert_eq!(humanize(0.0), (0.0, ""));
    }

    #[test]
    fn scales_millions_and_beyond() {
        assert_eq!(humanize(2_500_000.0), (2.5, "M"));
        assert_eq!(humanize(3_000_000_000.0), (3.0, "B"));
        assert_eq!(humanize(1.2e13), (12.0, "T"));
    }

    #[test]
    fn negative_preserves_sign() {
        assert_eq!(humanize(-1500.0), (-1.5, "K"));
        assert_eq!(humanize(-999.0), (-999.0, ""));
    }

    #[test]
    fn beyond_top_tier_falls_back_to_largest() {
        let (scaled, unit) = humanize(5e15);
        assert_eq!(unit, "T");
        assert_eq!(scaled, 5000.0);
    }

    #[test]
    fn round_trips_through_tier_divisor() {
        for value in [0.0, 12.0, 999.0, 1000.0, 54_321.0, 7.7e9, 1.3e12] {
            let (scaled, unit) = humanize(value);
            let restored = scaled * tier_divisor(unit);
            assert!(
                (restored - value).abs() <= value.abs() * 1e-12,
                "{value} -> {scaled}{unit} -> {restored}"
            );
            if !unit.is_empty() {
                assert!((1.0..1000.0).contains(&scaled.abs()) || value.abs() >= 1e15);
            }
        }
    }
}
