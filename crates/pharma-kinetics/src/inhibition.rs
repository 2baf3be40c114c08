//! Reversible enzyme inhibition.
//!
//! All forms are written in terms of the inhibition factor
//! `alpha = 1 + [I]/Ki`. At `[I] = 0`, `alpha = 1` and every form collapses
//! to plain Michaelis-Menten (or plain Lineweaver-Burk).
//!
//! | mode           | apparent Km | apparent Vmax |
//! |----------------|-------------|---------------|
//! | competitive    | `Km*alpha`  | `Vmax`        |
//! | noncompetitive | `Km`        | `Vmax/alpha`  |
//! | uncompetitive  | `Km/alpha`  | `Vmax/alpha`  |

use num_traits::Float;
use pharma_core::InhibitionMode;

/// `alpha = 1 + [I]/Ki`.
#[inline]
pub fn inhibition_factor<F: Float>(ki: F, conc_i: F) -> F {
    F::one() + conc_i / ki
}

/// `v0 = Vmax*[S] / (Km*alpha + [S])`.
#[inline]
pub fn mm_competitive<F: Float>(substrate: F, vmax: F, km: F, ki: F, conc_i: F) -> F {
    let alpha = inhibition_factor(ki, conc_i);
    (vmax * substrate) / (km * alpha + substrate)
}

/// `v0 = Vmax*[S] / (Km*alpha + [S]*alpha)`.
#[inline]
pub fn mm_noncompetitive<F: Float>(substrate: F, vmax: F, km: F, ki: F, conc_i: F) -> F {
    let alpha = inhibition_factor(ki, conc_i);
    (vmax * substrate) / (km * alpha + substrate * alpha)
}

/// `v0 = Vmax*[S] / (Km + [S]*alpha)`.
#[inline]
pub fn mm_uncompetitive<F: Float>(substrate: F, vmax: F, km: F, ki: F, conc_i: F) -> F {
    let alpha = inhibition_factor(ki, conc_i);
    (vmax * substrate) / (km + substrate * alpha)
}

/// `1/v0 = (Km*alpha/Vmax)*(1/[S]) + 1/Vmax`: steeper slope, same y-intercept.
#[inline]
pub fn lb_competitive<F: Float>(inverse_substrate: F, vmax: F, km: F, ki: F, conc_i: F) -> F {
    let alpha = inhibition_factor(ki, conc_i);
    ((km * alpha) / vmax) * inverse_substrate + vmax.recip()
}

/// `1/v0 = (Km/Vmax)*alpha*(1/[S]) + alpha/Vmax`: same x-intercept.
#[inline]
pub fn lb_noncompetitive<F: Float>(inverse_substrate: F, vmax: F, km: F, ki: F, conc_i: F) -> F {
    let alpha = inhibition_factor(ki, conc_i);
    (km / vmax) * (alpha * inverse_substrate) + alpha / vmax
}

/// `1/v0 = (Km/Vmax)*(1/[S]) + alpha/Vmax`: parallel lines.
#[inline]
pub fn lb_uncompetitive<F: Float>(inverse_substrate: F, vmax: F, km: F, ki: F, conc_i: F) -> F {
    let alpha = inhibition_factor(ki, conc_i);
    (km / vmax) * inverse_substrate + alpha / vmax
}

/// Velocity under the given inhibition mode.
pub fn mm_inhibited<F: Float>(
    mode: InhibitionMode,
    substrate: F,
    vmax: F,
    km: F,
    ki: F,
    conc_i: F,
) -> F {
    match mode {
        InhibitionMode::Competitive => mm_competitive(substrate, vmax, km, ki, conc_i),
        InhibitionMode::Noncompetitive => mm_noncompetitive(substrate, vmax, km, ki, conc_i),
        InhibitionMode::Uncompetitive => mm_uncompetitive(substrate, vmax, km, ki, conc_i),
    }
}

/// Inverse velocity under the given inhibition mode, from `1/[S]`.
pub fn lb_inhibited<F: Float>(
    mode: InhibitionMode,
    inverse_substrate: F,
    vmax: F,
    km: F,
    ki: F,
    conc_i: F,
) -> F {
    match mode {
        InhibitionMode::Competitive => lb_competitive(inverse_substrate, vmax, km, ki, conc_i),
        InhibitionMode::Noncompetitive => {
            lb_noncompetitive(inverse_substrate, vmax, km, ki, conc_i)
        }
        InhibitionMode::Uncompetitive => lb_uncompetitive(inverse_substrate, vmax, km, ki, conc_i),
    }
}

/// Km observed in the presence of inhibitor.
pub fn apparent_km<F: Float>(mode: InhibitionMode, km: F, ki: F, conc_i: F) -> F {
    let alpha = inhibition_factor(ki, conc_i);
    match mode {
        InhibitionMode::Competitive => km * alpha,
        InhibitionMode::Noncompetitive => km,
        InhibitionMode::Uncompetitive => km / alpha,
    }
}

/// Vmax observed in the presence of inhibitor.
pub fn apparent_vmax<F: Float>(mode: InhibitionMode, vmax: F, ki: F, conc_i: F) -> F {
    let alpha = inhibition_factor(ki, conc_i);
    match mode {
        InhibitionMode::Competitive => vmax,
        InhibitionMode::Noncompetitive | InhibitionMode::Uncompetitive => vmax / alpha,
    }
}
