//! Uninhibited Michaelis-Menten kinetics and its double-reciprocal form.

use num_traits::Float;

/// Initial velocity `v0 = Vmax*[S] / (Km + [S])`.
///
/// # Examples
///
/// ```
/// use pharma_kinetics::michaelis_menten;
/// let v = michaelis_menten(2.0, 5.0, 2.0);
/// assert_eq!(v, 2.5);
/// ```
#[inline]
pub fn michaelis_menten<F: Float>(substrate: F, vmax: F, km: F) -> F {
    (vmax * substrate) / (km + substrate)
}

/// Inverse initial velocity `1/v0 = (Km/Vmax)*(1/[S]) + 1/Vmax`.
///
/// Takes the inverse substrate concentration, so the result is linear in the
/// input and the line can be drawn through `1/[S] <= 0` to show the x-axis
/// intercept at `-1/Km`.
#[inline]
pub fn lineweaver_burk<F: Float>(inverse_substrate: F, vmax: F, km: F) -> F {
    (km / vmax) * inverse_substrate + vmax.recip()
}

/// Axis intercepts and slope of a Lineweaver-Burk line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineweaverBurkIntercepts {
    /// `-1/Km`, where the line crosses `1/v = 0`.
    pub x: f64,
    /// `1/Vmax`, where the line crosses `1/[S] = 0`.
    pub y: f64,
    /// `Km/Vmax`.
    pub slope: f64,
}

impl LineweaverBurkIntercepts {
    pub fn new(vmax: f64, km: f64) -> Self {
        Self {
            x: -km.recip(),
            y: vmax.recip(),
            slope: km / vmax,
        }
    }
}
