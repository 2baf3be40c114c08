//! Parameter-bound receptor models implementing [`ResponseModel`].

use pharma_core::{ModelKind, ParamSet, ResponseModel};

use crate::binding::{specific_binding, specific_binding_hill};
use crate::displacement::competitive_binding;
use crate::dose_response::four_parameter_logistic;
use crate::pow10;

fn param_set<const N: usize>(pairs: [(&str, f64); N]) -> ParamSet {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

/// Saturation binding against free ligand concentration (M).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecificBinding {
    pub bmax: f64,
    pub kd: f64,
}

impl SpecificBinding {
    pub fn new(bmax: f64, kd: f64) -> Self {
        Self { bmax, kd }
    }
}

impl ResponseModel for SpecificBinding {
    fn kind(&self) -> ModelKind {
        ModelKind::SpecificBinding
    }

    fn response(&self, l: f64) -> f64 {
        specific_binding(l, self.bmax, self.kd)
    }

    fn params(&self) -> ParamSet {
        param_set([("bmax", self.bmax), ("kd", self.kd)])
    }

    fn summary(&self) -> ParamSet {
        param_set([
            ("log_kd", self.kd.log10()),
            ("scatchard_slope", -self.kd.recip()),
            ("scatchard_intercept", self.bmax / self.kd),
        ])
    }
}

/// Cooperative binding with a Hill coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HillBinding {
    pub bmax: f64,
    pub kd: f64,
    pub hill: f64,
}

impl HillBinding {
    pub fn new(bmax: f64, kd: f64, hill: f64) -> Self {
        Self { bmax, kd, hill }
    }
}

impl ResponseModel for HillBinding {
    fn kind(&self) -> ModelKind {
        ModelKind::SpecificBindingHill
    }

    fn response(&self, l: f64) -> f64 {
        specific_binding_hill(l, self.bmax, self.kd, self.hill)
    }

    fn params(&self) -> ParamSet {
        param_set([("bmax", self.bmax), ("kd", self.kd), ("hill", self.hill)])
    }

    fn summary(&self) -> ParamSet {
        param_set([("log_kd", self.kd.log10()), ("half_max", self.bmax / 2.0)])
    }
}

/// Radioligand displacement by a competitor, against `log10[competitor]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompetitiveDisplacement {
    pub nonspecific: f64,
    pub total: f64,
    pub pic50: f64,
    pub nh: f64,
}

impl CompetitiveDisplacement {
    pub fn new(nonspecific: f64, total: f64, pic50: f64, nh: f64) -> Self {
        Self {
            nonspecific,
            total,
            pic50,
            nh,
        }
    }

    /// Molar IC50, `10^-pIC50`.
    pub fn ic50(&self) -> f64 {
        pow10(-self.pic50)
    }
}

impl ResponseModel for CompetitiveDisplacement {
    fn kind(&self) -> ModelKind {
        ModelKind::CompetitiveBinding
    }

    fn response(&self, log_inhibitor: f64) -> f64 {
        competitive_binding(log_inhibitor, self.nonspecific, self.total, self.pic50, self.nh)
    }

    fn params(&self) -> ParamSet {
        param_set([
            ("nonspecific", self.nonspecific),
            ("total", self.total),
            ("pic50", self.pic50),
            ("nh", self.nh),
        ])
    }

    fn summary(&self) -> ParamSet {
        param_set([
            ("ic50", self.ic50()),
            ("log_ic50", -self.pic50),
            ("midpoint", (self.total + self.nonspecific) / 2.0),
        ])
    }
}

/// Four-parameter logistic dose response, against `log10[agonist]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FourParameterLogistic {
    pub top: f64,
    pub bottom: f64,
    pub hillslope: f64,
    pub log_ec50: f64,
}

impl FourParameterLogistic {
    pub fn new(top: f64, bottom: f64, hillslope: f64, log_ec50: f64) -> Self {
        Self {
            top,
            bottom,
            hillslope,
            log_ec50,
        }
    }

    /// Molar EC50, `10^logEC50`.
    pub fn ec50(&self) -> f64 {
        pow10(self.log_ec50)
    }
}

impl ResponseModel for FourParameterLogistic {
    fn kind(&self) -> ModelKind {
        ModelKind::FourParameterLogistic
    }

    fn response(&self, log_cpnd: f64) -> f64 {
        four_parameter_logistic(log_cpnd, self.top, self.bottom, self.hillslope, self.log_ec50)
    }

    fn params(&self) -> ParamSet {
        param_set([
            ("top", self.top),
            ("bottom", self.bottom),
            ("hillslope", self.hillslope),
            ("log_ec50", self.log_ec50),
        ])
    }

    fn summary(&self) -> ParamSet {
        param_set([
            ("ec50", self.ec50()),
            ("pec50", -self.log_ec50),
            ("midpoint", (self.top + self.bottom) / 2.0),
            ("span", self.top - self.bottom),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::scatchard;
    use approx::assert_relative_eq;

    #[test]
    fn params_use_canonical_names() {
        for model in [
            &SpecificBinding::new(100.0, 1e-6) as &dyn ResponseModel,
            &HillBinding::new(100.0, 1e-6, 1.5),
            &CompetitiveDisplacement::new(0.0, 100.0, 6.0, 1.0),
            &FourParameterLogistic::new(100.0, 0.0, 1.0, -6.0),
        ] {
            let mut expected: Vec<&str> = model.kind().param_names().to_vec();
            expected.sort();
            let got: Vec<String> = model.params().into_keys().collect();
            assert_eq!(got, expected, "{}", model.kind());
        }
    }

    #[test]
    fn binding_summary_reports_log_kd() {
        let sb = SpecificBinding::new(100.0, 1e-6);
        assert_relative_eq!(sb.summary()["log_kd"], -6.0, max_relative = 1e-12);
        assert_relative_eq!(sb.response(1e-6), 50.0, max_relative = 1e-12);
    }

    #[test]
    fn scatchard_summary_is_the_line() {
        let sb = SpecificBinding::new(100.0, 1e-6);
        let s = sb.summary();
        let (b, bf) = scatchard(3e-7, sb.bmax, sb.kd);
        let on_line = s["scatchard_intercept"] + s["scatchard_slope"] * b;
        assert_relative_eq!(bf, on_line, max_relative = 1e-9);
    }

    #[test]
    fn logistic_summary_reports_pec50() {
        let fpl = FourParameterLogistic::new(100.0, 0.0, 1.0, -6.0);
        let s = fpl.summary();
        assert_eq!(s["pec50"], 6.0);
        assert_relative_eq!(s["ec50"], 1e-6, max_relative = 1e-12);
        assert_eq!(s["midpoint"], 50.0);
        assert_relative_eq!(fpl.response(-6.0), 50.0);
    }

    #[test]
    fn displacement_summary() {
        let cd = CompetitiveDisplacement::new(10.0, 90.0, 7.0, 1.0);
        let s = cd.summary();
        assert_relative_eq!(s["ic50"], 1e-7, max_relative = 1e-12);
        assert_eq!(s["log_ic50"], -7.0);
        assert_eq!(s["midpoint"], 50.0);
        assert_relative_eq!(cd.response(-7.0), 50.0);
    }
}
