//! Stock pages end to end: resolve, check against the equations, render.

use approx::assert_relative_eq;
use pharma_core::{ModelKind, ParamSet, PlotError};
use pharma_plot::figure::{ModelBinding, ParamBinding, Widget};
use pharma_plot::{build_model, render_page, scene, write_page, Page, Panel, Series};
use pharma_receptors::{four_parameter_logistic, specific_binding_hill};

/// The JSON embedded in a rendered page.
fn page_json(html: &str) -> serde_json::Value {
    let open = r#"<script type="application/json" id="page-data">"#;
    let start = html.find(open).expect("page-data script") + open.len();
    let len = html[start..].find("</script>").expect("closing tag");
    serde_json::from_str(&html[start..start + len]).expect("valid JSON")
}

fn slider_value(panel: &Panel, id: &str) -> f64 {
    match panel.find_widget(id) {
        Some(Widget::Slider { value, .. }) => *value,
        other => panic!("{id}: expected slider, found {other:?}"),
    }
}

/// Evaluate a series from its bindings without going through `resolve`.
fn expected(panel: &Panel, series: &Series) -> (Vec<f64>, Vec<f64>) {
    let kind: ModelKind = match &series.model {
        ModelBinding::Fixed { model } => *model,
        ModelBinding::Select { widget, choices } => match panel.find_widget(widget) {
            Some(Widget::Select { value, .. }) => choices[value],
            other => panic!("{widget}: expected select, found {other:?}"),
        },
    };
    let params: ParamSet = series
        .params
        .iter()
        .map(|(name, b)| {
            let v = match b {
                ParamBinding::Fixed { value } => *value,
                ParamBinding::Widget { id, transform } => transform.apply(slider_value(panel, id)),
            };
            (name.clone(), v)
        })
        .collect();
    let model = build_model(kind, &params).unwrap();
    series.projection.apply(&series.inputs, &model.curve(&series.inputs))
}

#[test]
fn baselines_match_the_equations_at_widget_defaults() {
    for page in scene::all() {
        let page = page.resolved().unwrap();
        for panel in &page.panels {
            for fig in &panel.figures {
                for series in &fig.series {
                    let (x, y) = expected(panel, series);
                    assert_eq!(series.x, x, "{}: {}", page.slug, fig.title);
                    assert_eq!(series.y, y, "{}: {}", page.slug, fig.title);
                }
            }
        }
    }
}

#[test]
fn every_series_is_driven_by_a_widget() {
    for page in scene::all() {
        for panel in &page.panels {
            for series in panel.figures.iter().flat_map(|f| &f.series) {
                let ids: Vec<&str> = series.widget_ids().collect();
                assert!(!ids.is_empty(), "{}: static series", page.slug);
                for id in ids {
                    assert!(panel.find_widget(id).is_some(), "{}: {id}", page.slug);
                }
            }
        }
    }
}

/// Index of the sample whose plotted x is closest to `target`.
fn nearest(series: &Series, target: f64) -> usize {
    series
        .x
        .iter()
        .enumerate()
        .min_by(|a, b| (a.1 - target).abs().total_cmp(&(b.1 - target).abs()))
        .map(|(i, _)| i)
        .unwrap()
}

#[test]
fn receptor_pages_convert_slider_units() {
    let page = scene::by_slug("10-receptors-dr").unwrap().resolved().unwrap();
    let series = &page.panels[0].figures[0].series[0];
    // pEC50 slider at 6 means logEC50 = -6
    let i = nearest(series, -6.0);
    assert!((series.x[i] + 6.0).abs() < 0.05);
    let want = four_parameter_logistic(series.x[i], 100.0, 0.0, 1.0, -6.0);
    assert_relative_eq!(series.y[i], want, max_relative = 1e-12);
    assert_relative_eq!(series.y[i], 50.0, epsilon = 2.5);
    assert!(series.y.first().unwrap() < &1.0);
    assert!(series.y.last().unwrap() > &99.0);

    let page = scene::by_slug("08-receptors-sb-hill").unwrap().resolved().unwrap();
    let series = &page.panels[0].figures[0].series[0];
    // log[Kd] slider at -6: half of Bmax at x = -6
    let i = nearest(series, -6.0);
    let want = specific_binding_hill(series.inputs[i], 100.0, 1e-6, 1.0);
    assert_relative_eq!(series.y[i], want, max_relative = 1e-9);
    assert_relative_eq!(series.y[i], 50.0, epsilon = 5.0);
}

#[test]
fn every_page_renders_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    for page in scene::all() {
        let path = write_page(&page, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), format!("{}.html", page.slug).as_str());

        let html = std::fs::read_to_string(&path).unwrap();
        let v = page_json(&html);
        assert_eq!(v["slug"], page.slug.as_str());
        assert_eq!(v["panels"].as_array().unwrap().len(), page.panels.len());
        assert!(html.contains("const MODELS"));
    }
    let written = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(written, scene::slugs().count());
}

#[test]
fn embedded_page_deserializes() {
    let page = scene::by_slug("07-receptors-sb-sc-dual").unwrap();
    let html = render_page(&page).unwrap();
    let back: Page = serde_json::from_value(page_json(&html)).unwrap();
    let resolved = page.resolved().unwrap();

    assert_eq!(back.slug, resolved.slug);
    assert_eq!(back.panels[0].widgets, resolved.panels[0].widgets);
    let (a, b) = (&back.panels[0].figures[1].series[0], &resolved.panels[0].figures[1].series[0]);
    assert_eq!(a.y.len(), b.y.len());
    for (x, y) in a.y.iter().zip(&b.y) {
        assert_relative_eq!(*x, *y, max_relative = 1e-15);
    }
}

#[test]
fn unknown_scene_is_an_error() {
    assert_eq!(
        scene::by_slug("11-arrhenius").unwrap_err(),
        PlotError::UnknownScene("11-arrhenius".into())
    );
}
