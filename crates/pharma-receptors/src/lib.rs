//! # pharma-receptors: receptor theory equations.
//!
//! - **Saturation binding**: `B = L*Bmax / (L + Kd)` and its Scatchard
//!   transformation `(B, B/L)`.
//! - **Cooperative binding**: the Hill form `B = L^h*Bmax / (L^h + Kd^h)`.
//! - **Competitive displacement**: radioligand binding against
//!   `log10[competitor]` with a pIC50 and Hill coefficient.
//! - **Dose response**: the four-parameter logistic in `log10[agonist]`.
//!
//! Concentrations are molar. Scalar functions are generic over
//! [`num_traits::Float`]; out-of-domain inputs produce NaN or infinity
//! rather than errors.

pub mod binding;
pub mod displacement;
pub mod dose_response;
pub mod model;

pub use binding::{
    scatchard, scatchard_many, scatchard_ratio, specific_binding, specific_binding_hill,
};
pub use displacement::competitive_binding;
pub use dose_response::four_parameter_logistic;
pub use model::{CompetitiveDisplacement, FourParameterLogistic, HillBinding, SpecificBinding};

use num_traits::{Float, FloatConst};

/// `10^x`, evaluated as `exp(x * ln 10)`.
#[inline]
pub(crate) fn pow10<F: Float + FloatConst>(x: F) -> F {
    (x * F::LN_10()).exp()
}
