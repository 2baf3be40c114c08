//! The stock chart pages.
//!
//! Each function builds an unresolved [`Page`]; [`Page::resolve`] (or
//! [`render_page`](crate::render::render_page)) evaluates its series.
//! Kinetic pages use μM and μM/s; receptor pages use molar concentrations
//! plotted on a log10 axis.

use pharma_core::constants::{
    DENSE_LINE_SAMPLES, DUAL_PLOT_WIDTH, KINETIC_POINT_SAMPLES, LINE_SAMPLES, PLOT_HEIGHT,
    RECEPTOR_POINT_SAMPLES,
};
use pharma_core::sampling::{finite_max, geomspace, linspace, logspace, reciprocal};
use pharma_core::{InhibitionMode, ModelKind, PlotError};

use crate::figure::{Figure, Page, Panel, Projection, Series, Transform, Widget};

const SUBSTRATE_AXIS: &str = "[S]: substrate concentration (μM)";
const VELOCITY_AXIS: &str = "initial velocity (μM/s)";
const INVERSE_SUBSTRATE_AXIS: &str = "1/[S]: substrate concentration (1/μM)";
const INVERSE_VELOCITY_AXIS: &str = "1/initial velocity (s/μM)";

const INHIBITION_SELECT: &str = "inhibition";

/// Samples along a Lineweaver-Burk line.
const LB_LINE_SAMPLES: usize = 50;

type SceneFn = fn() -> Page;

const SCENES: &[(&str, SceneFn)] = &[
    ("01-mm-basic", mm_basic),
    ("01b-mm-scatter", mm_scatter),
    ("02-lb-basic", lb_basic),
    ("03-mm-inhib", mm_inhib),
    ("04-dual-lb-mm-plot", dual_lb_mm),
    ("05-mm-inhib-dropdown", mm_inhib_dropdown),
    ("06-lb-inhib-dropdown", lb_inhib_dropdown),
    ("07-receptors-sb-sc-dual", receptors_sb_sc_dual),
    ("08-receptors-sb-hill", receptors_sb_hill),
    ("09-receptors-competitive", receptors_competitive),
    ("10-receptors-dr", receptors_dose_response),
];

/// Slugs of every stock page, in display order.
pub fn slugs() -> impl Iterator<Item = &'static str> {
    SCENES.iter().map(|(slug, _)| *slug)
}

/// Every stock page, unresolved.
pub fn all() -> Vec<Page> {
    SCENES.iter().map(|(_, build)| build()).collect()
}

pub fn by_slug(slug: &str) -> Result<Page, PlotError> {
    SCENES
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, build)| build())
        .ok_or_else(|| PlotError::UnknownScene(slug.to_string()))
}

fn vmax_slider(start: f64, end: f64, value: f64, step: f64) -> Widget {
    Widget::slider("vmax", "Vmax (μM/s)", start, end, value, step)
}

fn km_slider(start: f64, end: f64, value: f64, step: f64) -> Widget {
    Widget::slider("km", "Km (μM)", start, end, value, step)
}

fn inhibitor_sliders(ki_start: f64) -> [Widget; 2] {
    [
        Widget::slider("conc_i", "[I] (μM)", 0.0, 100.0, 0.0, 1.0),
        Widget::slider("ki", "Ki (μM)", ki_start, 100.0, 50.0, 1.0),
    ]
}

fn inhibition_select() -> Widget {
    let options: Vec<&str> = InhibitionMode::ALL.iter().map(|m| m.name()).collect();
    Widget::select(
        INHIBITION_SELECT,
        "Inhibition Type:",
        InhibitionMode::Competitive.name(),
        &options,
    )
}

fn log_kd_slider() -> Widget {
    Widget::slider("kd", "log[Kd (M)]", -8.0, -3.0, -6.0, 0.1)
}

fn bmax_slider() -> Widget {
    Widget::slider("bmax", "Bmax", 0.0, 200.0, 100.0, 10.0)
}

fn hill_slider() -> Widget {
    Widget::slider("hill", "Hill Coefficient", 0.1, 4.0, 1.0, 0.1)
}

/// Plain Michaelis-Menten series with both constants on sliders.
fn mm_series(series: Series) -> Series {
    series.bound("vmax", "vmax").bound("km", "km")
}

/// Inhibited series with fixed enzyme constants and inhibitor sliders.
fn inhibited_series(series: Series, vmax: f64, km: f64) -> Series {
    series
        .fixed("vmax", vmax)
        .fixed("km", km)
        .bound("ki", "ki")
        .bound("conc_i", "conc_i")
}

fn mm_basic() -> Page {
    let x = logspace(-3.0, 2.0, DENSE_LINE_SAMPLES);
    let figure = Figure::new(
        "Michaelis-Menten Kinetics",
        "substrate concentration (μM)",
        VELOCITY_AXIS,
    )
    .y_range(0.0, 200.0)
    .label(50.0, 70.0, "Km = 10 (μM), Vmax = 100 (μM/s)")
    .series(mm_series(Series::line(ModelKind::MichaelisMenten, x)));

    Page::new("01-mm-basic", "Michaelis-Menten Kinetics").panel(
        Panel::new()
            .figure(figure)
            .widget(vmax_slider(0.1, 200.0, 100.0, 1.0))
            .widget(km_slider(1.0, 100.0, 10.0, 1.0)),
    )
}

fn mm_scatter() -> Page {
    let figure = Figure::new("Michaelis-Menten Kinetics", SUBSTRATE_AXIS, VELOCITY_AXIS)
        .x_range(-5.0, 100.0)
        .y_range(-5.0, 200.0)
        .label(50.0, 70.0, "Km = 10 (μM), Vmax = 100 (μM/s)")
        .with_axis_spans()
        .series(mm_series(Series::line(
            ModelKind::MichaelisMenten,
            logspace(-1.0, 3.0, LINE_SAMPLES),
        )))
        .series(mm_series(Series::circle(
            ModelKind::MichaelisMenten,
            logspace(-1.0, 3.0, KINETIC_POINT_SAMPLES),
        )));

    Page::new("01b-mm-scatter", "Michaelis Menten Kinetics").panel(
        Panel::new()
            .figure(figure)
            .widget(vmax_slider(0.0, 200.0, 100.0, 1.0))
            .widget(km_slider(1.0, 100.0, 10.0, 1.0)),
    )
}

/// Points at `1/[S]` for `[S]` geometric over 0.1..10 μM, and a line from
/// `1/[S] = -3` out to the last point so the x-intercept is visible.
fn lb_grids() -> (Vec<f64>, Vec<f64>) {
    let points = reciprocal(&geomspace(0.1, 10.0, 8));
    let end = finite_max(&points).unwrap_or(10.0);
    (linspace(-3.0, end, LB_LINE_SAMPLES), points)
}

fn lb_figure(title: &str, line: Series, points: Series) -> Figure {
    Figure::new(title, INVERSE_SUBSTRATE_AXIS, INVERSE_VELOCITY_AXIS)
        .x_range(-1.5, 4.0)
        .y_range(-0.05, 0.8)
        .with_axis_spans()
        .series(line)
        .series(points)
}

fn lb_basic() -> Page {
    let (line, points) = lb_grids();
    let figure = lb_figure(
        "Lineweaver-Burk Kinetics",
        mm_series(Series::line(ModelKind::LineweaverBurk, line)),
        mm_series(Series::circle(ModelKind::LineweaverBurk, points)),
    )
    .label(0.3, 0.4, "Km = 1 (μM), Vmax = 10 (μM/s)");

    Page::new("02-lb-basic", "Lineweaver-Burk Plot").panel(
        Panel::new()
            .figure(figure)
            .widget(vmax_slider(3.0, 50.0, 10.0, 1.0))
            .widget(km_slider(0.1, 4.0, 1.0, 0.1)),
    )
}

fn mm_inhib_figure(title: &str, line: Series, points: Series) -> Figure {
    Figure::new(title, SUBSTRATE_AXIS, VELOCITY_AXIS)
        .x_range(-5.0, 100.0)
        .y_range(-5.0, 120.0)
        .label(10.0, 87.0, "[I] = 0 (μM)")
        .with_axis_spans()
        .series(line)
        .series(points)
}

fn mm_inhib_series(kind: ModelKind) -> (Series, Series) {
    let line = Series::line(kind, logspace(-1.0, 4.0, LINE_SAMPLES));
    let points = Series::circle(kind, logspace(-1.0, 4.0, KINETIC_POINT_SAMPLES));
    (
        inhibited_series(line, 100.0, 5.0),
        inhibited_series(points, 100.0, 5.0),
    )
}

fn mm_inhib() -> Page {
    let mut page = Page::new("03-mm-inhib", "Michaelis Menten Kinetics + Inhibition");
    for mode in InhibitionMode::ALL {
        let (line, points) = mm_inhib_series(ModelKind::mm_inhibited(mode));
        let title = match mode {
            InhibitionMode::Competitive => "Michaelis-Menten Kinetics with Competitive Inhibition",
            InhibitionMode::Noncompetitive => {
                "Michaelis-Menten Kinetics with Noncompetitive Inhibition"
            }
            InhibitionMode::Uncompetitive => {
                "Michaelis-Menten Kinetics with Uncompetitive Inhibition"
            }
        };
        let [conc_i, ki] = inhibitor_sliders(1.0);
        page = page.panel(
            Panel::new()
                .figure(mm_inhib_figure(title, line, points))
                .widget(conc_i)
                .widget(ki),
        );
    }
    page
}

fn dual_lb_mm() -> Page {
    const LABEL: &str = "Km = 1 (μM), Vmax = 10 (μM/s)";

    let mm = Figure::new("Michaelis-Menten Kinetics", SUBSTRATE_AXIS, VELOCITY_AXIS)
        .size(DUAL_PLOT_WIDTH, PLOT_HEIGHT)
        .x_range(-0.5, 10.0)
        .y_range(-0.5, 20.0)
        .label(3.8, 10.0, LABEL)
        .with_axis_spans()
        .series(mm_series(Series::line(
            ModelKind::MichaelisMenten,
            logspace(-2.0, 3.0, LINE_SAMPLES),
        )))
        .series(mm_series(Series::circle(
            ModelKind::MichaelisMenten,
            logspace(-2.0, 3.0, KINETIC_POINT_SAMPLES),
        )));

    let (line, points) = lb_grids();
    let lb = lb_figure(
        "Lineweaver-Burk Kinetics",
        mm_series(Series::line(ModelKind::LineweaverBurk, line)),
        mm_series(Series::circle(ModelKind::LineweaverBurk, points)),
    )
    .size(DUAL_PLOT_WIDTH, PLOT_HEIGHT)
    .label(-0.1, 0.4, LABEL);

    Page::new("04-dual-lb-mm-plot", "Michaelis-Menten Kinetics").panel(
        Panel::new()
            .figure(mm)
            .figure(lb)
            .widget(vmax_slider(1.0, 20.0, 10.0, 0.1))
            .widget(km_slider(0.1, 10.0, 1.0, 0.1)),
    )
}

fn mm_choices() -> Vec<(&'static str, ModelKind)> {
    InhibitionMode::ALL
        .iter()
        .map(|m| (m.name(), ModelKind::mm_inhibited(*m)))
        .collect()
}

fn lb_choices() -> Vec<(&'static str, ModelKind)> {
    InhibitionMode::ALL
        .iter()
        .map(|m| (m.name(), ModelKind::lb_inhibited(*m)))
        .collect()
}

fn mm_inhib_dropdown() -> Page {
    let choices = mm_choices();
    let (line, points) = mm_inhib_series(ModelKind::MmCompetitive);
    let figure = mm_inhib_figure(
        "Michaelis-Menten Kinetics with Inhibition",
        line.selected_by(INHIBITION_SELECT, &choices),
        points.selected_by(INHIBITION_SELECT, &choices),
    );
    let [conc_i, ki] = inhibitor_sliders(1.0);

    Page::new("05-mm-inhib-dropdown", "Michaelis-Menten Kinetics with Inhibition").panel(
        Panel::new()
            .figure(figure)
            .widget(conc_i)
            .widget(ki)
            .widget(inhibition_select()),
    )
}

fn lb_inhib_dropdown() -> Page {
    let (vmax, km) = (10.0, 1.0);
    let choices = lb_choices();
    let points = reciprocal(&logspace(-2.0, 1.0, 12));
    let end = finite_max(&points).unwrap_or(100.0);
    let line = linspace(-3.0 / km, end, 5);

    let figure = lb_figure(
        "Lineweaver-Burk Kinetics with Inhibition",
        inhibited_series(Series::line(ModelKind::LbCompetitive, line), vmax, km)
            .selected_by(INHIBITION_SELECT, &choices),
        inhibited_series(Series::circle(ModelKind::LbCompetitive, points), vmax, km)
            .selected_by(INHIBITION_SELECT, &choices),
    )
    .label(2.0, 0.2, "[I] = 0 (μM)");
    let [conc_i, ki] = inhibitor_sliders(15.0);

    Page::new("06-lb-inhib-dropdown", "Lineweaver-Burk Kinetics with Inhibition").panel(
        Panel::new()
            .figure(figure)
            .widget(conc_i)
            .widget(ki)
            .widget(inhibition_select()),
    )
}

/// Binding series with `Kd` driven by a log10 slider.
fn binding_series(series: Series) -> Series {
    series
        .bound("bmax", "bmax")
        .bound_with("kd", "kd", Transform::Pow10)
}

fn receptors_sb_sc_dual() -> Page {
    const LABEL: &str = "log(Kd) = -6, Bmax = 100";
    let line = || {
        binding_series(Series::line(
            ModelKind::SpecificBinding,
            logspace(-9.0, -3.0, LINE_SAMPLES),
        ))
    };
    let points = || {
        binding_series(Series::circle(
            ModelKind::SpecificBinding,
            logspace(-9.0, -3.0, RECEPTOR_POINT_SAMPLES),
        ))
    };

    let binding = Figure::new("Specific Binding", "log[Free Compound (M)]", "Specific Binding")
        .size(DUAL_PLOT_WIDTH, PLOT_HEIGHT)
        .label(-6.0, 20.0, LABEL)
        .with_axis_spans()
        .series(line().with_projection(Projection::Log10Input))
        .series(points().with_projection(Projection::Log10Input));

    let scatchard = Figure::new(
        "Scatchard Transformation",
        "Specific Binding",
        "Specific Binding/Free Ligand",
    )
    .size(DUAL_PLOT_WIDTH, PLOT_HEIGHT)
    .label(50.0, 6e7, LABEL)
    .with_axis_spans()
    .series(line().with_projection(Projection::Scatchard))
    .series(points().with_projection(Projection::Scatchard));

    Page::new("07-receptors-sb-sc-dual", "Dual Saturation Binding and Scatchard Plot").panel(
        Panel::new()
            .figure(binding)
            .figure(scatchard)
            .widget(bmax_slider())
            .widget(log_kd_slider()),
    )
}

fn receptors_sb_hill() -> Page {
    let hill = |series: Series| {
        binding_series(series)
            .bound("hill", "hill")
            .with_projection(Projection::Log10Input)
    };
    let figure = Figure::new("Specific Binding", "log[compound (M)]", "Specific Binding")
        .x_range(-9.1, -2.9)
        .y_range(-10.0, 210.0)
        .label(-5.2, 110.0, "log(Kd) = -6, Bmax = 100")
        .with_axis_spans()
        .series(hill(Series::line(
            ModelKind::SpecificBindingHill,
            logspace(-9.0, -3.0, LINE_SAMPLES),
        )))
        .series(hill(Series::circle(
            ModelKind::SpecificBindingHill,
            logspace(-9.0, -3.0, RECEPTOR_POINT_SAMPLES),
        )));

    Page::new("08-receptors-sb-hill", "Saturation Binding Curve with Cooperativity").panel(
        Panel::new()
            .figure(figure)
            .widget(bmax_slider())
            .widget(log_kd_slider())
            .widget(hill_slider()),
    )
}

fn receptors_competitive() -> Page {
    let displacement = |series: Series| {
        series
            .fixed("nonspecific", 0.0)
            .fixed("total", 100.0)
            .bound("pic50", "pic50")
            .bound("nh", "hill")
    };
    let figure = Figure::new(
        "Competitive Inhibition",
        "log[competitor (M)]",
        "% Specific Binding of Radioligand",
    )
    .y_range(-10.0, 115.0)
    .label(-7.0, 105.0, "pIC50 = 6, Hill Coefficient = 1")
    .with_axis_spans()
    .series(displacement(Series::line(
        ModelKind::CompetitiveBinding,
        linspace(-9.0, -3.0, LINE_SAMPLES),
    )))
    .series(displacement(Series::circle(
        ModelKind::CompetitiveBinding,
        linspace(-9.0, -3.0, RECEPTOR_POINT_SAMPLES),
    )));

    Page::new("09-receptors-competitive", "Competitive Inhibition").panel(
        Panel::new()
            .figure(figure)
            .widget(Widget::slider("pic50", "pIC50", 3.0, 8.0, 6.0, 0.1))
            .widget(hill_slider()),
    )
}

fn receptors_dose_response() -> Page {
    let logistic = |series: Series| {
        series
            .bound("top", "top")
            .bound("bottom", "bottom")
            .bound_with("log_ec50", "pec50", Transform::Negate)
            .bound("hillslope", "hill")
    };
    let figure = Figure::new("Dose Response Curve", "log[agonist (M)]", "% Response")
        .y_range(-5.0, 205.0)
        .label(-6.5, 105.0, "Top=100, Bottom=0, pEC50=6, Hill=1")
        .with_axis_spans()
        .series(logistic(Series::line(
            ModelKind::FourParameterLogistic,
            linspace(-9.0, -3.0, LINE_SAMPLES),
        )))
        .series(logistic(Series::circle(
            ModelKind::FourParameterLogistic,
            linspace(-9.0, -3.0, RECEPTOR_POINT_SAMPLES),
        )));

    Page::new("10-receptors-dr", "Dose Response").panel(
        Panel::new()
            .figure(figure)
            .widget(Widget::slider("top", "Top Response (%)", 0.0, 200.0, 100.0, 5.0))
            .widget(Widget::slider("bottom", "Bottom Response (%)", 0.0, 200.0, 0.0, 5.0))
            .widget(Widget::slider("pec50", "pEC50", 3.0, 8.0, 6.0, 0.1))
            .widget(hill_slider()),
    )
}
