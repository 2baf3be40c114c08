//! Shared defaults. Concentrations are in μM for kinetics and M for receptor
//! binding unless noted otherwise.

/// Samples along a smooth curve.
pub const LINE_SAMPLES: usize = 100;

/// Scatter points overlaid on kinetic curves.
pub const KINETIC_POINT_SAMPLES: usize = 20;

/// Scatter points overlaid on receptor curves.
pub const RECEPTOR_POINT_SAMPLES: usize = 16;

/// Samples on the single Michaelis-Menten page.
pub const DENSE_LINE_SAMPLES: usize = 500;

/// Width of a figure that has the page to itself, in CSS pixels.
pub const PLOT_WIDTH: u32 = 600;

/// Width of each figure on a side-by-side page.
pub const DUAL_PLOT_WIDTH: u32 = 500;

pub const PLOT_HEIGHT: u32 = 400;

/// Unit label for kinetic concentrations.
pub const CONC_UNIT: &str = "μM";

/// Unit label for initial velocity.
pub const VELOCITY_UNIT: &str = "μM/s";

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "pharmaplot.toml";

/// Prefix of environment variables that override configuration.
pub const ENV_PREFIX: &str = "PHARMAPLOT";
