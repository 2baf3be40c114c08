//! Saturation binding isotherms.

use num_traits::Float;

/// Specific binding `B = L*Bmax / (L + Kd)` at free ligand concentration `L`.
///
/// # Examples
///
/// ```
/// use pharma_receptors::specific_binding;
/// // half occupancy at L = Kd
/// assert_eq!(specific_binding(2.0, 100.0, 2.0), 50.0);
/// ```
#[inline]
pub fn specific_binding<F: Float>(l: F, bmax: F, kd: F) -> F {
    (l * bmax) / (l + kd)
}

/// Bound over free, the Scatchard ordinate. `0/0` at zero ligand is NaN.
#[inline]
pub fn scatchard_ratio<F: Float>(bound: F, free: F) -> F {
    bound / free
}

/// Scatchard transformation: returns `(B, B/L)`.
///
/// Plotting `B/L` against `B` gives a straight line of slope `-1/Kd` that
/// meets the x-axis at `Bmax`. At `L = 0` the ratio is `0/0 = NaN`.
#[inline]
pub fn scatchard<F: Float>(l: F, bmax: F, kd: F) -> (F, F) {
    let b = specific_binding(l, bmax, kd);
    (b, scatchard_ratio(b, l))
}

/// [`scatchard`] over a ligand grid, split into the bound and bound/free
/// columns.
pub fn scatchard_many(ls: &[f64], bmax: f64, kd: f64) -> (Vec<f64>, Vec<f64>) {
    ls.iter().map(|&l| scatchard(l, bmax, kd)).unzip()
}

/// Hill binding `B = L^h*Bmax / (L^h + Kd^h)`.
///
/// With `h = 1` this is [`specific_binding`]. Negative `L` with a
/// fractional `h` gives NaN.
#[inline]
pub fn specific_binding_hill<F: Float>(l: F, bmax: F, kd: F, hill_coef: F) -> F {
    let l_h = l.powf(hill_coef);
    (l_h * bmax) / (l_h + kd.powf(hill_coef))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const BMAX: f64 = 100.0;
    const KD: f64 = 1e-6;

    #[test]
    fn half_occupancy_at_kd() {
        assert_relative_eq!(specific_binding(KD, BMAX, KD), BMAX / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn saturates_at_bmax() {
        assert_relative_eq!(specific_binding(1.0, BMAX, KD), BMAX, max_relative = 1e-5);
    }

    #[test]
    fn scatchard_ratio_is_bound_over_free() {
        let l = 3e-7;
        let (b, bf) = scatchard(l, BMAX, KD);
        assert_eq!(b, specific_binding(l, BMAX, KD));
        assert_eq!(bf, b / l);
    }

    #[test]
    fn scatchard_is_linear_in_bound() {
        // B/F = (Bmax - B) / Kd
        for l in [1e-9, 1e-7, 1e-6, 1e-4] {
            let (b, bf) = scatchard(l, BMAX, KD);
            assert_relative_eq!(bf, (BMAX - b) / KD, max_relative = 1e-9);
        }
    }

    #[test]
    fn scatchard_ratio_approaches_bmax_over_kd() {
        let (_, bf) = scatchard(1e-15, BMAX, KD);
        assert_relative_eq!(bf, BMAX / KD, max_relative = 1e-8);
    }

    #[test]
    fn scatchard_at_zero_ligand_is_nan() {
        let (b, bf) = scatchard(0.0, BMAX, KD);
        assert_eq!(b, 0.0);
        assert!(bf.is_nan());
    }

    #[test]
    fn scatchard_many_splits_columns() {
        let (b, bf) = scatchard_many(&[1e-7, 1e-6], BMAX, KD);
        assert_eq!(b.len(), 2);
        assert_eq!(bf.len(), 2);
        assert_relative_eq!(b[1], 50.0, max_relative = 1e-12);
        assert_relative_eq!(bf[1], 50.0 / 1e-6, max_relative = 1e-12);
    }

    #[test]
    fn hill_steepens_around_kd() {
        // Above Kd a higher Hill coefficient binds more, below it binds less.
        let above = 2.0 * KD;
        let below = 0.5 * KD;
        assert!(specific_binding_hill(above, BMAX, KD, 2.0) > specific_binding(above, BMAX, KD));
        assert!(specific_binding_hill(below, BMAX, KD, 2.0) < specific_binding(below, BMAX, KD));
        let at_kd = specific_binding_hill(KD, BMAX, KD, 3.0);
        assert_relative_eq!(at_kd, BMAX / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn hill_with_negative_ligand_and_fractional_coefficient_is_nan() {
        assert!(specific_binding_hill(-1e-6, BMAX, KD, 0.5).is_nan());
    }

    proptest! {
        #[test]
        fn unit_hill_coefficient_is_plain_binding(
            l in 1e-12f64..1e-2,
            bmax in 1e-2f64..1e4,
            kd in 1e-12f64..1e-2,
        ) {
            let plain = specific_binding(l, bmax, kd);
            let hill = specific_binding_hill(l, bmax, kd, 1.0);
            prop_assert!((plain - hill).abs() <= 1e-12 * plain.abs().max(1e-300));
        }

        #[test]
        fn binding_never_exceeds_bmax(
            l in 0.0f64..1.0,
            bmax in 1e-2f64..1e4,
            kd in 1e-12f64..1e-2,
            h in 0.1f64..4.0,
        ) {
            prop_assert!(specific_binding(l, bmax, kd) <= bmax * (1.0 + 1e-12));
            prop_assert!(specific_binding_hill(l, bmax, kd, h) <= bmax * (1.0 + 1e-12));
        }
    }
}
