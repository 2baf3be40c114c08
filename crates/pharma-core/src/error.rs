//! Error types for pharmaplot.
//!
//! The formulas themselves never fail: IEEE 754 infinities and NaNs pass
//! through untouched. Errors only arise when a model is chosen by name or
//! when a chart page is assembled and written.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown model: {0}")] UnknownModel(String),
    #[error("unknown inhibition mode: {0}")] UnknownInhibition(String),
    #[error("{model}: missing parameter `{param}`")] MissingParameter { model: String, param: String },
    #[error("{model}: unknown parameter `{param}`")] UnknownParameter { model: String, param: String },
    #[error("malformed parameter `{0}`, expected name=value")] MalformedParameter(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlotError {
    #[error("unknown scene: {0}")] UnknownScene(String),
    #[error("unknown widget: {0}")] UnknownWidget(String),
    #[error("widget {id} is not a {expected}")] WidgetKind { id: String, expected: &'static str },
    #[error("duplicate widget id: {0}")] DuplicateWidget(String),
    #[error("invalid slider {id}: {reason}")] InvalidSlider { id: String, reason: String },
    #[error("select {id} has no option {value:?}")] InvalidSelect { id: String, value: String },
    #[error("series bound to {widget}: no model for option {option:?}")] UnmappedChoice { widget: String, option: String },
    #[error("model: {0}")] Model(#[from] ModelError),
    #[error("serialization: {0}")] Serialization(String),
    #[error("io: {0}")] Io(String),
}

impl From<std::io::Error> for PlotError {
    fn from(e: std::io::Error) -> Self {
        PlotError::Io(e.to_string())
    }
}
