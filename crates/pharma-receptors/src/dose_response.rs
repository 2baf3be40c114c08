//! Sigmoidal dose response.

use num_traits::{Float, FloatConst};

use crate::pow10;

/// Four-parameter logistic in `log10` agonist concentration:
///
/// `Y = bottom + (top - bottom) / (1 + 10^((logEC50 - log[A]) * hillslope))`
///
/// The curve passes through `(top + bottom)/2` at `log[A] = logEC50`. A
/// negative `hillslope` mirrors it into an inhibition curve.
#[inline]
pub fn four_parameter_logistic<F: Float + FloatConst>(
    log_cpnd: F,
    top: F,
    bottom: F,
    hillslope: F,
    log_ec50: F,
) -> F {
    bottom + (top - bottom) / (F::one() + pow10((log_ec50 - log_cpnd) * hillslope))
}
