//! # pharma-core
//! Foundation types and traits shared by the pharmaplot crates.

pub mod constants;
pub mod error;
pub mod sampling;
pub mod traits;
pub mod types;

pub use error::{ModelError, PlotError};
pub use traits::ResponseModel;
pub use types::{InhibitionMode, ModelKind, ParamSet};
