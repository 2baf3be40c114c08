//! Parameter-bound kinetic models implementing [`ResponseModel`].

use pharma_core::{InhibitionMode, ModelKind, ParamSet, ResponseModel};

use crate::inhibition::{apparent_km, apparent_vmax, lb_inhibited, mm_inhibited};
use crate::michaelis::{lineweaver_burk, michaelis_menten, LineweaverBurkIntercepts};

fn param_set<const N: usize>(pairs: [(&str, f64); N]) -> ParamSet {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

fn intercept_summary(vmax: f64, km: f64, i: LineweaverBurkIntercepts) -> ParamSet {
    param_set([
        ("km_app", km),
        ("vmax_app", vmax),
        ("x_intercept", i.x),
        ("y_intercept", i.y),
        ("slope", i.slope),
    ])
}

/// Velocity against substrate concentration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MichaelisMenten {
    pub vmax: f64,
    pub km: f64,
}

impl MichaelisMenten {
    pub fn new(vmax: f64, km: f64) -> Self {
        Self { vmax, km }
    }

    /// The same enzyme on double-reciprocal axes.
    pub fn reciprocal(&self) -> LineweaverBurk {
        LineweaverBurk::new(self.vmax, self.km)
    }
}

impl ResponseModel for MichaelisMenten {
    fn kind(&self) -> ModelKind {
        ModelKind::MichaelisMenten
    }

    fn response(&self, substrate: f64) -> f64 {
        michaelis_menten(substrate, self.vmax, self.km)
    }

    fn params(&self) -> ParamSet {
        param_set([("vmax", self.vmax), ("km", self.km)])
    }

    fn summary(&self) -> ParamSet {
        intercept_summary(self.vmax, self.km, self.reciprocal().intercepts())
    }
}

/// Inverse velocity against inverse substrate concentration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineweaverBurk {
    pub vmax: f64,
    pub km: f64,
}

impl LineweaverBurk {
    pub fn new(vmax: f64, km: f64) -> Self {
        Self { vmax, km }
    }

    pub fn intercepts(&self) -> LineweaverBurkIntercepts {
        LineweaverBurkIntercepts::new(self.vmax, self.km)
    }
}

impl ResponseModel for LineweaverBurk {
    fn kind(&self) -> ModelKind {
        ModelKind::LineweaverBurk
    }

    fn response(&self, inverse_substrate: f64) -> f64 {
        lineweaver_burk(inverse_substrate, self.vmax, self.km)
    }

    fn params(&self) -> ParamSet {
        param_set([("vmax", self.vmax), ("km", self.km)])
    }

    fn summary(&self) -> ParamSet {
        intercept_summary(self.vmax, self.km, self.intercepts())
    }
}

/// Michaelis-Menten velocity with a reversible inhibitor present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InhibitedKinetics {
    pub mode: InhibitionMode,
    pub vmax: f64,
    pub km: f64,
    pub ki: f64,
    pub conc_i: f64,
}

impl InhibitedKinetics {
    pub fn new(mode: InhibitionMode, vmax: f64, km: f64, ki: f64, conc_i: f64) -> Self {
        Self {
            mode,
            vmax,
            km,
            ki,
            conc_i,
        }
    }

    pub fn apparent_km(&self) -> f64 {
        apparent_km(self.mode, self.km, self.ki, self.conc_i)
    }

    pub fn apparent_vmax(&self) -> f64 {
        apparent_vmax(self.mode, self.vmax, self.ki, self.conc_i)
    }

    /// The same inhibited enzyme on double-reciprocal axes.
    pub fn reciprocal(&self) -> InhibitedLineweaverBurk {
        InhibitedLineweaverBurk::new(self.mode, self.vmax, self.km, self.ki, self.conc_i)
    }
}

impl ResponseModel for InhibitedKinetics {
    fn kind(&self) -> ModelKind {
        ModelKind::mm_inhibited(self.mode)
    }

    fn response(&self, substrate: f64) -> f64 {
        mm_inhibited(self.mode, substrate, self.vmax, self.km, self.ki, self.conc_i)
    }

    fn params(&self) -> ParamSet {
        param_set([
            ("vmax", self.vmax),
            ("km", self.km),
            ("ki", self.ki),
            ("conc_i", self.conc_i),
        ])
    }

    fn summary(&self) -> ParamSet {
        let i = self.reciprocal().intercepts();
        intercept_summary(self.apparent_vmax(), self.apparent_km(), i)
    }
}

/// Lineweaver-Burk line with a reversible inhibitor present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InhibitedLineweaverBurk {
    pub mode: InhibitionMode,
    pub vmax: f64,
    pub km: f64,
    pub ki: f64,
    pub conc_i: f64,
}

impl InhibitedLineweaverBurk {
    pub fn new(mode: InhibitionMode, vmax: f64, km: f64, ki: f64, conc_i: f64) -> Self {
        Self {
            mode,
            vmax,
            km,
            ki,
            conc_i,
        }
    }

    pub fn intercepts(&self) -> LineweaverBurkIntercepts {
        LineweaverBurkIntercepts::new(
            apparent_vmax(self.mode, self.vmax, self.ki, self.conc_i),
            apparent_km(self.mode, self.km, self.ki, self.conc_i),
        )
    }
}

impl ResponseModel for InhibitedLineweaverBurk {
    fn kind(&self) -> ModelKind {
        ModelKind::lb_inhibited(self.mode)
    }

    fn response(&self, inverse_substrate: f64) -> f64 {
        lb_inhibited(self.mode, inverse_substrate, self.vmax, self.km, self.ki, self.conc_i)
    }

    fn params(&self) -> ParamSet {
        param_set([
            ("vmax", self.vmax),
            ("km", self.km),
            ("ki", self.ki),
            ("conc_i", self.conc_i),
        ])
    }

    fn summary(&self) -> ParamSet {
        intercept_summary(
            apparent_vmax(self.mode, self.vmax, self.ki, self.conc_i),
            apparent_km(self.mode, self.km, self.ki, self.conc_i),
            self.intercepts(),
        )
    }
}
