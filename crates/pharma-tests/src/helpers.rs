//! Shared helpers for the integration tests.

use pharma_core::sampling::{linspace, logspace};
use pharma_core::{ModelKind, ParamSet};

/// Build a parameter set from literal pairs.
pub fn params(pairs: &[(&str, f64)]) -> ParamSet {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// Parameters matching the stock pages' starting values for each model.
pub fn typical_params(kind: ModelKind) -> ParamSet {
    match kind {
        ModelKind::MichaelisMenten | ModelKind::LineweaverBurk => {
            params(&[("vmax", 100.0), ("km", 10.0)])
        }
        ModelKind::MmCompetitive
        | ModelKind::MmNoncompetitive
        | ModelKind::MmUncompetitive
        | ModelKind::LbCompetitive
        | ModelKind::LbNoncompetitive
        | ModelKind::LbUncompetitive => {
            params(&[("vmax", 100.0), ("km", 5.0), ("ki", 50.0), ("conc_i", 25.0)])
        }
        ModelKind::SpecificBinding => params(&[("bmax", 100.0), ("kd", 1e-6)]),
        ModelKind::SpecificBindingHill => params(&[("bmax", 100.0), ("kd", 1e-6), ("hill", 1.5)]),
        ModelKind::CompetitiveBinding => params(&[
            ("nonspecific", 0.0),
            ("total", 100.0),
            ("pic50", 6.0),
            ("nh", 1.0),
        ]),
        ModelKind::FourParameterLogistic => params(&[
            ("top", 100.0),
            ("bottom", 0.0),
            ("hillslope", 1.0),
            ("log_ec50", -6.0),
        ]),
    }
}

/// A sensible input grid in each model's own units.
pub fn typical_inputs(kind: ModelKind) -> Vec<f64> {
    match kind {
        ModelKind::MichaelisMenten
        | ModelKind::MmCompetitive
        | ModelKind::MmNoncompetitive
        | ModelKind::MmUncompetitive => logspace(-1.0, 4.0, 100),
        ModelKind::LineweaverBurk
        | ModelKind::LbCompetitive
        | ModelKind::LbNoncompetitive
        | ModelKind::LbUncompetitive => linspace(-3.0, 10.0, 50),
        ModelKind::SpecificBinding | ModelKind::SpecificBindingHill => logspace(-9.0, -3.0, 100),
        ModelKind::CompetitiveBinding | ModelKind::FourParameterLogistic => {
            linspace(-9.0, -3.0, 100)
        }
    }
}

/// Relative closeness with an absolute floor for values near zero.
pub fn close(a: f64, b: f64, rel: f64) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(1.0)
}
