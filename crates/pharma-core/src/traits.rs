//! Trait interfaces shared across crates.
//!
//! [`ResponseModel`] is implemented by every parameterized equation in
//! pharma-kinetics and pharma-receptors, and consumed by the chart layer.

use std::fmt::Debug;

use crate::types::{ModelKind, ParamSet};

/// A single-input equation with its parameters bound.
///
/// Evaluation is pure. Non-finite results are returned as-is.
pub trait ResponseModel: Debug + Send + Sync {
    /// Which named equation this is.
    fn kind(&self) -> ModelKind;

    /// Output for one value of the independent variable.
    fn response(&self, x: f64) -> f64;

    /// Elementwise output over a grid.
    ///
    /// Default implementation maps [`response`](Self::response).
    fn curve(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.response(x)).collect()
    }

    /// The bound parameters, keyed by [`ModelKind::param_names`].
    fn params(&self) -> ParamSet;

    /// Derived constants worth reporting next to a curve (intercepts,
    /// apparent constants, half-maximal concentrations).
    fn summary(&self) -> ParamSet {
        ParamSet::new()
    }
}
