//! Competitive radioligand displacement.

use num_traits::{Float, FloatConst};

use crate::pow10;

/// Radioligand binding in the presence of an unlabelled competitor:
///
/// `Y = nonspecific + (total - nonspecific) / (1 + 10^(nH*(pIC50 + log[I])))`
///
/// `log_inhibitor` is `log10` of the molar competitor concentration, so the
/// curve falls through its midpoint at `log[I] = -pIC50`.
#[inline]
pub fn competitive_binding<F: Float + FloatConst>(
    log_inhibitor: F,
    nonspecific: F,
    total: F,
    pic50: F,
    nh: F,
) -> F {
    nonspecific + (total - nonspecific) / (F::one() + pow10(nh * (pic50 + log_inhibitor)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn midpoint_at_ic50() {
        assert_relative_eq!(competitive_binding(-6.0, 0.0, 100.0, 6.0, 1.0), 50.0);
        assert_relative_eq!(competitive_binding(-7.5, 10.0, 90.0, 7.5, 2.3), 50.0);
    }

    #[test]
    fn plateaus_at_total_and_nonspecific() {
        let low_dose = competitive_binding(-12.0, 5.0, 100.0, 6.0, 1.0);
        let high_dose = competitive_binding(0.0, 5.0, 100.0, 6.0, 1.0);
        assert_relative_eq!(low_dose, 100.0, max_relative = 1e-5);
        assert_relative_eq!(high_dose, 5.0, max_relative = 1e-4);
    }

    #[test]
    fn one_decade_past_ic50_with_unit_slope() {
        // 10^1 → 100 / 11
        let y = competitive_binding(-5.0, 0.0, 100.0, 6.0, 1.0);
        assert_relative_eq!(y, 100.0 / 11.0, max_relative = 1e-12);
    }

    #[test]
    fn huge_exponent_overflows_to_nonspecific() {
        // 10^400 = inf → (total - nonspecific) / inf = 0
        assert_eq!(competitive_binding(394.0, 3.0, 100.0, 6.0, 1.0), 3.0);
    }

    proptest! {
        #[test]
        fn displacement_is_non_increasing(
            a in -12.0f64..0.0,
            b in -12.0f64..0.0,
            pic50 in 3.0f64..10.0,
            nh in 0.1f64..4.0,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let y_lo = competitive_binding(lo, 0.0, 100.0, pic50, nh);
            let y_hi = competitive_binding(hi, 0.0, 100.0, pic50, nh);
            prop_assert!(y_hi <= y_lo + 1e-9);
        }
    }
}
