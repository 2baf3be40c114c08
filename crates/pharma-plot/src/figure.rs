//! Declarative chart pages.
//!
//! A [`Page`] is a row of [`Panel`]s; each panel holds figures side by side
//! and a column of widgets. Series parameters are bound either to a fixed
//! value or to a widget by id, and [`Panel::resolve`] evaluates every series
//! at the widgets' initial values. The resolved arrays become the static
//! baseline drawn behind the live curve in the rendered page.

use std::collections::{BTreeMap, HashMap, HashSet};

use pharma_core::constants::{PLOT_HEIGHT, PLOT_WIDTH};
use pharma_core::sampling::log10;
use pharma_core::{ModelKind, ParamSet, PlotError};
use pharma_receptors::scatchard_ratio;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::registry::build_model;

/// An input control in a panel's widget column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Widget {
    Slider {
        id: String,
        title: String,
        start: f64,
        end: f64,
        value: f64,
        step: f64,
    },
    Select {
        id: String,
        title: String,
        value: String,
        options: Vec<String>,
    },
}

impl Widget {
    pub fn slider(id: &str, title: &str, start: f64, end: f64, value: f64, step: f64) -> Self {
        Widget::Slider {
            id: id.to_string(),
            title: title.to_string(),
            start,
            end,
            value,
            step,
        }
    }

    pub fn select(id: &str, title: &str, value: &str, options: &[&str]) -> Self {
        Widget::Select {
            id: id.to_string(),
            title: title.to_string(),
            value: value.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Widget::Slider { id, .. } | Widget::Select { id, .. } => id,
        }
    }

    fn validate(&self) -> Result<(), PlotError> {
        match self {
            Widget::Slider { id, start, end, value, step, .. } => {
                let invalid = |reason: &str| PlotError::InvalidSlider {
                    id: id.clone(),
                    reason: reason.to_string(),
                };
                if ![start, end, value, step].iter().all(|v| v.is_finite()) {
                    return Err(invalid("non-finite bound"));
                }
                if start > end {
                    return Err(invalid("start exceeds end"));
                }
                if value < start || value > end {
                    return Err(invalid("value outside [start, end]"));
                }
                if *step <= 0.0 {
                    return Err(invalid("step must be positive"));
                }
                Ok(())
            }
            Widget::Select { id, value, options, .. } => {
                if options.contains(value) {
                    Ok(())
                } else {
                    Err(PlotError::InvalidSelect {
                        id: id.clone(),
                        value: value.clone(),
                    })
                }
            }
        }
    }
}

/// Maps a slider value onto a model parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transform {
    #[default]
    Identity,
    /// Slider in log10 units, parameter linear (`Kd` from `log[Kd]`).
    Pow10,
    /// `logEC50` from a pEC50 slider.
    Negate,
}

impl Transform {
    pub fn apply(self, v: f64) -> f64 {
        match self {
            Transform::Identity => v,
            Transform::Pow10 => 10f64.powf(v),
            Transform::Negate => -v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ParamBinding {
    Fixed {
        value: f64,
    },
    Widget {
        id: String,
        #[serde(default)]
        transform: Transform,
    },
}

/// Which model a series evaluates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ModelBinding {
    Fixed { model: ModelKind },
    /// Chosen by a select widget; every option must map to a model.
    Select {
        widget: String,
        choices: BTreeMap<String, ModelKind>,
    },
}

/// How `(input, output)` pairs land on the figure axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Projection {
    /// `(x, f(x))`
    #[default]
    Direct,
    /// `(log10 x, f(x))`
    Log10Input,
    /// `(f(x), f(x)/x)`
    Scatchard,
}

impl Projection {
    pub fn apply(self, inputs: &[f64], outputs: &[f64]) -> (Vec<f64>, Vec<f64>) {
        match self {
            Projection::Direct => (inputs.to_vec(), outputs.to_vec()),
            Projection::Log10Input => (log10(inputs), outputs.to_vec()),
            Projection::Scatchard => (
                outputs.to_vec(),
                outputs.iter().zip(inputs).map(|(&b, &l)| scatchard_ratio(b, l)).collect(),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    Line,
    Circle,
}

/// One curve or scatter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub glyph: Glyph,
    #[serde(default)]
    pub projection: Projection,
    pub model: ModelBinding,
    pub params: BTreeMap<String, ParamBinding>,
    /// Model inputs, before projection.
    #[serde(deserialize_with = "nullable_floats")]
    pub inputs: Vec<f64>,
    /// Projected coordinates at the widgets' initial values; filled by
    /// [`Panel::resolve`].
    #[serde(default, deserialize_with = "nullable_floats")]
    pub x: Vec<f64>,
    #[serde(default, deserialize_with = "nullable_floats")]
    pub y: Vec<f64>,
}

/// serde_json writes NaN and infinities as `null`; read those back as NaN.
fn nullable_floats<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
    let values: Vec<Option<f64>> = Vec::deserialize(deserializer)?;
    Ok(values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

impl Series {
    fn new(glyph: Glyph, model: ModelKind, inputs: Vec<f64>) -> Self {
        Self {
            glyph,
            projection: Projection::Direct,
            model: ModelBinding::Fixed { model },
            params: BTreeMap::new(),
            inputs,
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    pub fn line(model: ModelKind, inputs: Vec<f64>) -> Self {
        Self::new(Glyph::Line, model, inputs)
    }

    pub fn circle(model: ModelKind, inputs: Vec<f64>) -> Self {
        Self::new(Glyph::Circle, model, inputs)
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Let a select widget pick the model.
    pub fn selected_by(mut self, widget: &str, choices: &[(&str, ModelKind)]) -> Self {
        self.model = ModelBinding::Select {
            widget: widget.to_string(),
            choices: choices.iter().map(|(o, k)| (o.to_string(), *k)).collect(),
        };
        self
    }

    pub fn fixed(mut self, param: &str, value: f64) -> Self {
        self.params.insert(param.to_string(), ParamBinding::Fixed { value });
        self
    }

    pub fn bound(self, param: &str, widget: &str) -> Self {
        self.bound_with(param, widget, Transform::Identity)
    }

    pub fn bound_with(mut self, param: &str, widget: &str, transform: Transform) -> Self {
        self.params.insert(
            param.to_string(),
            ParamBinding::Widget {
                id: widget.to_string(),
                transform,
            },
        );
        self
    }

    /// Model kind at the widgets' current values.
    fn current_model(&self, widgets: &HashMap<&str, &Widget>) -> Result<ModelKind, PlotError> {
        match &self.model {
            ModelBinding::Fixed { model } => Ok(*model),
            ModelBinding::Select { widget, choices } => {
                match widgets.get(widget.as_str()) {
                    Some(Widget::Select { value, options, .. }) => {
                        if let Some(option) = options.iter().find(|o| !choices.contains_key(*o)) {
                            return Err(PlotError::UnmappedChoice {
                                widget: widget.clone(),
                                option: option.clone(),
                            });
                        }
                        choices.get(value).copied().ok_or_else(|| PlotError::UnmappedChoice {
                            widget: widget.clone(),
                            option: value.clone(),
                        })
                    }
                    Some(Widget::Slider { .. }) => Err(PlotError::WidgetKind {
                        id: widget.clone(),
                        expected: "select",
                    }),
                    None => Err(PlotError::UnknownWidget(widget.clone())),
                }
            }
        }
    }

    /// Parameter values at the widgets' current values.
    fn current_params(&self, widgets: &HashMap<&str, &Widget>) -> Result<ParamSet, PlotError> {
        let mut params = ParamSet::new();
        for (name, binding) in &self.params {
            let value = match binding {
                ParamBinding::Fixed { value } => *value,
                ParamBinding::Widget { id, transform } => match widgets.get(id.as_str()) {
                    Some(Widget::Slider { value, .. }) => transform.apply(*value),
                    Some(Widget::Select { .. }) => {
                        return Err(PlotError::WidgetKind {
                            id: id.clone(),
                            expected: "slider",
                        });
                    }
                    None => return Err(PlotError::UnknownWidget(id.clone())),
                },
            };
            params.insert(name.clone(), value);
        }
        Ok(params)
    }

    fn evaluate(&mut self, widgets: &HashMap<&str, &Widget>) -> Result<(), PlotError> {
        let kind = self.current_model(widgets)?;
        let params = self.current_params(widgets)?;
        let model = build_model(kind, &params)?;
        let outputs = model.curve(&self.inputs);
        let (x, y) = self.projection.apply(&self.inputs, &outputs);
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// Widget ids this series reads.
    pub fn widget_ids(&self) -> impl Iterator<Item = &str> {
        let model = match &self.model {
            ModelBinding::Select { widget, .. } => Some(widget.as_str()),
            ModelBinding::Fixed { .. } => None,
        };
        model.into_iter().chain(self.params.values().filter_map(|b| match b {
            ParamBinding::Widget { id, .. } => Some(id.as_str()),
            ParamBinding::Fixed { .. } => None,
        }))
    }
}

/// A text annotation in data coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: u32,
    pub height: u32,
    /// Fixed axis range; `None` fits the data.
    pub x_range: Option<[f64; 2]>,
    pub y_range: Option<[f64; 2]>,
    pub labels: Vec<Label>,
    /// Draw faint lines along `x = 0` and `y = 0`.
    pub axis_spans: bool,
    pub series: Vec<Series>,
}

impl Figure {
    pub fn new(title: &str, x_label: &str, y_label: &str) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
            x_range: None,
            y_range: None,
            labels: Vec::new(),
            axis_spans: false,
            series: Vec::new(),
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn x_range(mut self, start: f64, end: f64) -> Self {
        self.x_range = Some([start, end]);
        self
    }

    pub fn y_range(mut self, start: f64, end: f64) -> Self {
        self.y_range = Some([start, end]);
        self
    }

    pub fn label(mut self, x: f64, y: f64, text: &str) -> Self {
        self.labels.push(Label {
            x,
            y,
            text: text.to_string(),
        });
        self
    }

    pub fn with_axis_spans(mut self) -> Self {
        self.axis_spans = true;
        self
    }

    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }
}

/// Figures in a row plus the widgets that drive them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Panel {
    pub figures: Vec<Figure>,
    pub widgets: Vec<Widget>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn figure(mut self, figure: Figure) -> Self {
        self.figures.push(figure);
        self
    }

    pub fn widget(mut self, widget: Widget) -> Self {
        self.widgets.push(widget);
        self
    }

    pub fn find_widget(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id() == id)
    }

    /// Validate the widgets and evaluate every series at their initial
    /// values.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid or duplicate widget, on a binding to a
    /// missing widget or a widget of the wrong kind, on a select option with
    /// no model, and on model construction errors.
    pub fn resolve(&mut self) -> Result<(), PlotError> {
        let mut seen = HashSet::new();
        for widget in &self.widgets {
            widget.validate()?;
            if !seen.insert(widget.id()) {
                return Err(PlotError::DuplicateWidget(widget.id().to_string()));
            }
        }
        let widgets: HashMap<&str, &Widget> = self.widgets.iter().map(|w| (w.id(), w)).collect();
        for series in self.figures.iter_mut().flat_map(|f| f.series.iter_mut()) {
            series.evaluate(&widgets)?;
        }
        Ok(())
    }
}

/// One HTML document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// File stem of the rendered page.
    pub slug: String,
    /// Document title.
    pub title: String,
    pub panels: Vec<Panel>,
}

impl Page {
    pub fn new(slug: &str, title: &str) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            panels: Vec::new(),
        }
    }

    pub fn panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }

    pub fn resolve(&mut self) -> Result<(), PlotError> {
        for panel in &mut self.panels {
            panel.resolve()?;
        }
        debug!(slug = %self.slug, panels = self.panels.len(), "page resolved");
        Ok(())
    }

    pub fn resolved(mut self) -> Result<Self, PlotError> {
        self.resolve()?;
        Ok(self)
    }

    pub fn figures(&self) -> impl Iterator<Item = &Figure> {
        self.panels.iter().flat_map(|p| p.figures.iter())
    }
}
