//! Name-based model construction.
//!
//! Maps a [`ModelKind`] and a [`ParamSet`] onto the concrete model structs of
//! pharma-kinetics and pharma-receptors. Every required parameter must be
//! present and no extra parameter is accepted; parameter values themselves
//! are not range-checked.

use pharma_core::{InhibitionMode, ModelError, ModelKind, ParamSet, ResponseModel};
use pharma_kinetics::{InhibitedKinetics, MichaelisMenten};
use pharma_receptors::{
    CompetitiveDisplacement, FourParameterLogistic, HillBinding, SpecificBinding,
};

/// Checked view of a parameter set for one model kind.
struct Params<'a> {
    kind: ModelKind,
    values: &'a ParamSet,
}

impl<'a> Params<'a> {
    fn new(kind: ModelKind, values: &'a ParamSet) -> Result<Self, ModelError> {
        let allowed = kind.param_names();
        if let Some(extra) = values.keys().find(|k| !allowed.contains(&k.as_str())) {
            return Err(ModelError::UnknownParameter {
                model: kind.name().to_string(),
                param: extra.clone(),
            });
        }
        Ok(Self { kind, values })
    }

    fn get(&self, name: &str) -> Result<f64, ModelError> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| ModelError::MissingParameter {
                model: self.kind.name().to_string(),
                param: name.to_string(),
            })
    }
}

fn kinetics(p: &Params<'_>) -> Result<MichaelisMenten, ModelError> {
    Ok(MichaelisMenten::new(p.get("vmax")?, p.get("km")?))
}

fn inhibited(mode: InhibitionMode, p: &Params<'_>) -> Result<InhibitedKinetics, ModelError> {
    Ok(InhibitedKinetics::new(
        mode,
        p.get("vmax")?,
        p.get("km")?,
        p.get("ki")?,
        p.get("conc_i")?,
    ))
}

/// Build a model from its name and parameters.
///
/// # Errors
///
/// [`ModelError::UnknownParameter`] if `params` holds a name the model does
/// not use, [`ModelError::MissingParameter`] if a required one is absent.
pub fn build_model(
    kind: ModelKind,
    params: &ParamSet,
) -> Result<Box<dyn ResponseModel>, ModelError> {
    let p = Params::new(kind, params)?;
    let model: Box<dyn ResponseModel> = match kind {
        ModelKind::MichaelisMenten => Box::new(kinetics(&p)?),
        ModelKind::LineweaverBurk => Box::new(kinetics(&p)?.reciprocal()),
        ModelKind::MmCompetitive => Box::new(inhibited(InhibitionMode::Competitive, &p)?),
        ModelKind::MmNoncompetitive => Box::new(inhibited(InhibitionMode::Noncompetitive, &p)?),
        ModelKind::MmUncompetitive => Box::new(inhibited(InhibitionMode::Uncompetitive, &p)?),
        ModelKind::LbCompetitive => {
            Box::new(inhibited(InhibitionMode::Competitive, &p)?.reciprocal())
        }
        ModelKind::LbNoncompetitive => {
            Box::new(inhibited(InhibitionMode::Noncompetitive, &p)?.reciprocal())
        }
        ModelKind::LbUncompetitive => {
            Box::new(inhibited(InhibitionMode::Uncompetitive, &p)?.reciprocal())
        }
        ModelKind::SpecificBinding => {
            Box::new(SpecificBinding::new(p.get("bmax")?, p.get("kd")?))
        }
        ModelKind::SpecificBindingHill => Box::new(HillBinding::new(
            p.get("bmax")?,
            p.get("kd")?,
            p.get("hill")?,
        )),
        ModelKind::CompetitiveBinding => Box::new(CompetitiveDisplacement::new(
            p.get("nonspecific")?,
            p.get("total")?,
            p.get("pic50")?,
            p.get("nh")?,
        )),
        ModelKind::FourParameterLogistic => Box::new(FourParameterLogistic::new(
            p.get("top")?,
            p.get("bottom")?,
            p.get("hillslope")?,
            p.get("log_ec50")?,
        )),
    };
    Ok(model)
}
