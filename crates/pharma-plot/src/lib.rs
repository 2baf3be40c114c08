//! # pharma-plot: interactive charts for the pharmaplot equations.
//!
//! A [`Page`](figure::Page) describes one HTML document: panels of figures,
//! each figure a set of series whose parameters are bound either to fixed
//! values or to slider/dropdown widgets. [`scene`] builds the stock
//! pages; [`render`] turns a page into a self-contained HTML file whose
//! embedded script re-evaluates the same formulas when a widget moves.
//!
//! [`registry`] resolves a [`ModelKind`](pharma_core::ModelKind) plus a
//! parameter set into a boxed [`ResponseModel`](pharma_core::ResponseModel),
//! and [`artifact`] packages an evaluated curve for CSV/JSON output.

pub mod artifact;
pub mod config;
pub mod figure;
pub mod registry;
pub mod render;
pub mod scene;

pub use artifact::CurveArtifact;
pub use config::{OutputFormat, PlotConfig};
pub use figure::{Figure, Page, Panel, Series, Widget};
pub use registry::build_model;
pub use render::{render_page, write_page};
