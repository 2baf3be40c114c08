use std::fmt::Write as _;

use pharma_core::{ModelKind, ParamSet, ResponseModel};
use serde::{Deserialize, Serialize};

/// A model evaluated over an input grid, ready for CSV or JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveArtifact {
    pub model: ModelKind,
    /// Parameters the curve was evaluated with.
    pub params: ParamSet,
    /// Derived quantities (apparent constants, intercepts, half-max points).
    pub summary: ParamSet,
    /// Model inputs, in the model's own units (see [`ModelKind::input_label`]).
    pub x: Vec<f64>,
    /// Responses aligned with `x`.
    pub y: Vec<f64>,
}

impl CurveArtifact {
    pub fn evaluate(model: &dyn ResponseModel, x: Vec<f64>) -> Self {
        let y = model.curve(&x);
        Self {
            model: model.kind(),
            params: model.params(),
            summary: model.summary(),
            x,
            y,
        }
    }

    /// `x,y` rows under a header naming the model's input.
    ///
    /// Non-finite values are written the way Rust formats them (`NaN`,
    /// `inf`, `-inf`).
    pub fn to_csv(&self) -> String {
        let mut out = String::with_capacity(24 * (self.x.len() + 1));
        let _ = writeln!(out, "{},y", self.model.input_label());
        for (x, y) in self.x.iter().zip(&self.y) {
            let _ = writeln!(out, "{x},{y}");
        }
        out
    }

    /// Pretty JSON. NaN and infinities become `null`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::build_model;

    fn mm() -> Box<dyn ResponseModel> {
        let params: ParamSet = [("vmax".to_string(), 5.0), ("km".to_string(), 2.0)].into();
        build_model(ModelKind::MichaelisMenten, &params).unwrap()
    }

    #[test]
    fn evaluate_records_model_and_params() {
        let a = CurveArtifact::evaluate(mm().as_ref(), vec![1.0, 2.0]);
        assert_eq!(a.model, ModelKind::MichaelisMenten);
        assert_eq!(a.params["vmax"], 5.0);
        assert_eq!(a.summary["km_app"], 2.0);
        assert_eq!(a.y, vec![5.0 / 3.0, 2.5]);
    }

    #[test]
    fn csv_has_header_and_one_row_per_point() {
        let a = CurveArtifact::evaluate(mm().as_ref(), vec![2.0, 0.0]);
        let csv = a.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("{},y", ModelKind::MichaelisMenten.input_label()));
        assert_eq!(lines[1], "2,2.5");
        assert_eq!(lines[2], "0,0");
    }

    #[test]
    fn json_nulls_non_finite_values() {
        let a = CurveArtifact::evaluate(mm().as_ref(), vec![-2.0]);
        assert!(a.y[0].is_infinite());
        let v: serde_json::Value = serde_json::from_str(&a.to_json().unwrap()).unwrap();
        assert_eq!(v["model"], "michaelis-menten");
        assert!(v["y"][0].is_null());
    }
}
