//! # pharma-kinetics: enzyme kinetics equations.
//!
//! - **Michaelis-Menten**: `v = Vmax*[S] / (Km + [S])`.
//! - **Lineweaver-Burk**: the double-reciprocal line
//!   `1/v = (Km/Vmax)*(1/[S]) + 1/Vmax`, taking `1/[S]` as input.
//! - **Reversible inhibition**: competitive, noncompetitive and uncompetitive
//!   forms of both, parameterized by `Ki` and the inhibitor concentration `[I]`.
//!
//! Scalar functions are generic over [`num_traits::Float`]. Nothing is
//! validated: a zero denominator gives infinity or NaN, as IEEE 754 says.
//! The structs in [`model`] bind parameters and implement
//! [`pharma_core::ResponseModel`] for elementwise evaluation.

pub mod inhibition;
pub mod michaelis;
pub mod model;

pub use inhibition::{
    apparent_km, apparent_vmax, inhibition_factor, lb_competitive, lb_inhibited,
    lb_noncompetitive, lb_uncompetitive, mm_competitive, mm_inhibited, mm_noncompetitive,
    mm_uncompetitive,
};
pub use michaelis::{lineweaver_burk, michaelis_menten, LineweaverBurkIntercepts};
pub use model::{InhibitedKinetics, InhibitedLineweaverBurk, LineweaverBurk, MichaelisMenten};
