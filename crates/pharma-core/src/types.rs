//! Named models, inhibition modes and parameter sets.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Named scalar parameters, ordered by name.
pub type ParamSet = BTreeMap<String, f64>;

/// Reversible enzyme inhibition mechanism.
///
/// With `alpha = 1 + [I]/Ki`:
/// - competitive: apparent Km is scaled by alpha, Vmax unchanged.
/// - noncompetitive: apparent Vmax is divided by alpha, Km unchanged.
/// - uncompetitive: both Km and Vmax are divided by alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InhibitionMode {
    #[default]
    Competitive,
    Noncompetitive,
    Uncompetitive,
}

impl InhibitionMode {
    pub const ALL: [InhibitionMode; 3] = [
        InhibitionMode::Competitive,
        InhibitionMode::Noncompetitive,
        InhibitionMode::Uncompetitive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Competitive => "competitive",
            Self::Noncompetitive => "noncompetitive",
            Self::Uncompetitive => "uncompetitive",
        }
    }
}

impl fmt::Display for InhibitionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InhibitionMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| ModelError::UnknownInhibition(s.to_string()))
    }
}

/// Every equation that can be selected by name.
///
/// Names are kebab-case and are shared by the CLI, the serialized chart pages
/// and the client-side script embedded in rendered HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    MichaelisMenten,
    LineweaverBurk,
    MmCompetitive,
    MmNoncompetitive,
    MmUncompetitive,
    LbCompetitive,
    LbNoncompetitive,
    LbUncompetitive,
    SpecificBinding,
    SpecificBindingHill,
    CompetitiveBinding,
    FourParameterLogistic,
}

const KINETIC_PARAMS: &[&str] = &["vmax", "km"];
const INHIBITED_PARAMS: &[&str] = &["vmax", "km", "ki", "conc_i"];

impl ModelKind {
    pub const ALL: [ModelKind; 12] = [
        ModelKind::MichaelisMenten,
        ModelKind::LineweaverBurk,
        ModelKind::MmCompetitive,
        ModelKind::MmNoncompetitive,
        ModelKind::MmUncompetitive,
        ModelKind::LbCompetitive,
        ModelKind::LbNoncompetitive,
        ModelKind::LbUncompetitive,
        ModelKind::SpecificBinding,
        ModelKind::SpecificBindingHill,
        ModelKind::CompetitiveBinding,
        ModelKind::FourParameterLogistic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::MichaelisMenten => "michaelis-menten",
            Self::LineweaverBurk => "lineweaver-burk",
            Self::MmCompetitive => "mm-competitive",
            Self::MmNoncompetitive => "mm-noncompetitive",
            Self::MmUncompetitive => "mm-uncompetitive",
            Self::LbCompetitive => "lb-competitive",
            Self::LbNoncompetitive => "lb-noncompetitive",
            Self::LbUncompetitive => "lb-uncompetitive",
            Self::SpecificBinding => "specific-binding",
            Self::SpecificBindingHill => "specific-binding-hill",
            Self::CompetitiveBinding => "competitive-binding",
            Self::FourParameterLogistic => "four-parameter-logistic",
        }
    }

    /// Parameter names the model requires, in formula order.
    pub fn param_names(&self) -> &'static [&'static str] {
        match self {
            Self::MichaelisMenten | Self::LineweaverBurk => KINETIC_PARAMS,
            Self::MmCompetitive
            | Self::MmNoncompetitive
            | Self::MmUncompetitive
            | Self::LbCompetitive
            | Self::LbNoncompetitive
            | Self::LbUncompetitive => INHIBITED_PARAMS,
            Self::SpecificBinding => &["bmax", "kd"],
            Self::SpecificBindingHill => &["bmax", "kd", "hill"],
            Self::CompetitiveBinding => &["nonspecific", "total", "pic50", "nh"],
            Self::FourParameterLogistic => &["top", "bottom", "hillslope", "log_ec50"],
        }
    }

    /// What the independent variable of the model means.
    pub fn input_label(&self) -> &'static str {
        match self {
            Self::MichaelisMenten
            | Self::MmCompetitive
            | Self::MmNoncompetitive
            | Self::MmUncompetitive => "substrate",
            Self::LineweaverBurk
            | Self::LbCompetitive
            | Self::LbNoncompetitive
            | Self::LbUncompetitive => "inverse_substrate",
            Self::SpecificBinding | Self::SpecificBindingHill => "free_ligand",
            Self::CompetitiveBinding => "log_inhibitor",
            Self::FourParameterLogistic => "log_compound",
        }
    }

    /// Inhibition mechanism for the inhibited kinetic models.
    pub fn inhibition(&self) -> Option<InhibitionMode> {
        match self {
            Self::MmCompetitive | Self::LbCompetitive => Some(InhibitionMode::Competitive),
            Self::MmNoncompetitive | Self::LbNoncompetitive => Some(InhibitionMode::Noncompetitive),
            Self::MmUncompetitive | Self::LbUncompetitive => Some(InhibitionMode::Uncompetitive),
            _ => None,
        }
    }

    /// Direct-plot Michaelis-Menten model for an inhibition mode.
    pub fn mm_inhibited(mode: InhibitionMode) -> Self {
        match mode {
            InhibitionMode::Competitive => Self::MmCompetitive,
            InhibitionMode::Noncompetitive => Self::MmNoncompetitive,
            InhibitionMode::Uncompetitive => Self::MmUncompetitive,
        }
    }

    /// Double-reciprocal model for an inhibition mode.
    pub fn lb_inhibited(mode: InhibitionMode) -> Self {
        match mode {
            InhibitionMode::Competitive => Self::LbCompetitive,
            InhibitionMode::Noncompetitive => Self::LbNoncompetitive,
            InhibitionMode::Uncompetitive => Self::LbUncompetitive,
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| ModelError::UnknownModel(s.to_string()))
    }
}

/// Parse a `name=value` parameter assignment.
///
/// Whitespace around either side is ignored. The value accepts anything
/// `f64::from_str` does, including `1e-6`, `inf` and `NaN`.
pub fn parse_param(assignment: &str) -> Result<(String, f64), ModelError> {
    let malformed = || ModelError::MalformedParameter(assignment.to_string());
    let (name, value) = assignment.split_once('=').ok_or_else(malformed)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(malformed());
    }
    let value: f64 = value.trim().parse().map_err(|_| malformed())?;
    Ok((name.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_names_round_trip_through_from_str() {
        for kind in ModelKind::ALL {
            assert_eq!(kind.name().parse::<ModelKind>().unwrap(), kind);
        }
    }

    #[test]
    fn serde_names_match_display_names() {
        for kind in ModelKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
        }
        for mode in InhibitionMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.name()));
        }
    }

    #[test]
    fn unknown_model_is_rejected() {
        let err = "michaelis".parse::<ModelKind>().unwrap_err();
        assert_eq!(err, ModelError::UnknownModel("michaelis".into()));
    }

    #[test]
    fn unknown_inhibition_is_rejected() {
        let err = "mixed".parse::<InhibitionMode>().unwrap_err();
        assert_eq!(err, ModelError::UnknownInhibition("mixed".into()));
    }

    #[test]
    fn inhibited_kinds_map_back_to_their_mode() {
        for mode in InhibitionMode::ALL {
            assert_eq!(ModelKind::mm_inhibited(mode).inhibition(), Some(mode));
            assert_eq!(ModelKind::lb_inhibited(mode).inhibition(), Some(mode));
        }
        assert_eq!(ModelKind::MichaelisMenten.inhibition(), None);
        assert_eq!(ModelKind::SpecificBinding.inhibition(), None);
    }

    #[test]
    fn param_names_are_unique_per_model() {
        for kind in ModelKind::ALL {
            let names = kind.param_names();
            let mut sorted = names.to_vec();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), names.len(), "{kind} repeats a parameter");
        }
    }

    #[test]
    fn parse_param_accepts_scientific_notation() {
        assert_eq!(parse_param("kd=1e-6").unwrap(), ("kd".to_string(), 1e-6));
        assert_eq!(parse_param(" vmax = 100 ").unwrap(), ("vmax".to_string(), 100.0));
    }

    #[test]
    fn parse_param_rejects_malformed_input() {
        for bad in ["vmax", "=3", "vmax=", "vmax=abc"] {
            assert_eq!(
                parse_param(bad).unwrap_err(),
                ModelError::MalformedParameter(bad.to_string()),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn default_inhibition_is_competitive() {
        assert_eq!(InhibitionMode::default(), InhibitionMode::Competitive);
    }
}
