//! Self-contained HTML output.
//!
//! The page is resolved, serialized to JSON and embedded next to a small
//! canvas script that redraws every figure when a widget changes. Nothing is
//! fetched at view time.

use std::fs;
use std::path::{Path, PathBuf};

use pharma_core::PlotError;
use tracing::debug;

use crate::figure::Page;

const PAGE_HTML: &str = include_str!("static/page.html");
const PAGE_SCRIPT: &str = include_str!("static/pharmaplot.js");

/// Render `page` as a complete HTML document.
///
/// Series baselines are recomputed from the widget defaults, so the page
/// need not be resolved beforehand.
pub fn render_page(page: &Page) -> Result<String, PlotError> {
    let page = page.clone().resolved()?;
    let json = serde_json::to_string(&page).map_err(|e| PlotError::Serialization(e.to_string()))?;
    // `<` only occurs inside JSON strings, where `<` is equivalent and
    // cannot close the surrounding script element.
    let json = json.replace('<', "\\u003c");
    let title = escape_html(&page.title);

    Ok(fill(
        PAGE_HTML,
        &[
            ("{{title}}", &title),
            ("{{page_json}}", &json),
            ("{{script}}", PAGE_SCRIPT),
        ],
    ))
}

/// Render `page` into `dir/<slug>.html`, creating `dir` if needed.
pub fn write_page(page: &Page, dir: &Path) -> Result<PathBuf, PlotError> {
    let html = render_page(page)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.html", page.slug));
    fs::write(&path, html)?;
    debug!(slug = %page.slug, path = %path.display(), "page written");
    Ok(path)
}

/// Substitute each `{{slot}}` once, in template order. Inserted text is
/// never rescanned.
fn fill(template: &str, slots: &[(&str, &str)]) -> String {
    let extra: usize = slots.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;
    while let Some((pos, key, value)) = slots
        .iter()
        .filter_map(|(k, v)| rest.find(k).map(|p| (p, *k, *v)))
        .min_by_key(|(p, _, _)| *p)
    {
        out.push_str(&rest[..pos]);
        out.push_str(value);
        rest = &rest[pos + key.len()..];
    }
    out.push_str(rest);
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{Figure, Panel, Series, Widget};
    use crate::scene;
    use pharma_core::ModelKind;

    /// The JSON between the page-data script tags.
    fn embedded_json(html: &str) -> &str {
        let open = r#"<script type="application/json" id="page-data">"#;
        let start = html.find(open).unwrap() + open.len();
        let len = html[start..].find("</script>").unwrap();
        &html[start..start + len]
    }

    #[test]
    fn page_embeds_resolved_json() {
        let page = scene::by_slug("01-mm-basic").unwrap();
        let html = render_page(&page).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Michaelis-Menten Kinetics</title>"));

        let v: serde_json::Value = serde_json::from_str(embedded_json(&html)).unwrap();
        assert_eq!(v["slug"], "01-mm-basic");
        let series = &v["panels"][0]["figures"][0]["series"][0];
        assert_eq!(series["model"]["model"], "michaelis-menten");
        assert_eq!(series["y"].as_array().unwrap().len(), 500);
    }

    #[test]
    fn script_is_inlined_and_slots_are_filled() {
        let html = render_page(&scene::by_slug("02-lb-basic").unwrap()).unwrap();
        assert!(html.contains("\"four-parameter-logistic\""));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn hostile_text_cannot_close_the_script() {
        let page = Page::new("x", "a </script> & <b>").panel(
            Panel::new().figure(
                Figure::new("</script><script>alert(1)</script>", "", "")
                    .series(
                        Series::line(ModelKind::MichaelisMenten, vec![1.0])
                            .fixed("vmax", 1.0)
                            .fixed("km", 1.0),
                    ),
            ),
        );
        let html = render_page(&page).unwrap();
        assert!(html.contains("<title>a &lt;/script&gt; &amp; &lt;b&gt;</title>"));
        let json = embedded_json(&html);
        assert!(!json.contains('<'));
        let v: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(v["panels"][0]["figures"][0]["title"], "</script><script>alert(1)</script>");
    }

    #[test]
    fn non_finite_values_serialize_as_null() {
        // Scatchard ratio at zero ligand is 0/0
        let page = Page::new("nan", "nan").panel(
            Panel::new()
                .figure(
                    Figure::new("", "", "").series(
                        Series::line(ModelKind::SpecificBinding, vec![0.0, 1.0])
                            .with_projection(crate::figure::Projection::Scatchard)
                            .bound("bmax", "bmax")
                            .fixed("kd", 1.0),
                    ),
                )
                .widget(Widget::slider("bmax", "Bmax", 0.0, 10.0, 2.0, 1.0)),
        );
        let html = render_page(&page).unwrap();
        let v: serde_json::Value = serde_json::from_str(embedded_json(&html)).unwrap();
        let y = &v["panels"][0]["figures"][0]["series"][0]["y"];
        assert!(y[0].is_null());
        assert_eq!(y[1], 1.0);
    }

    #[test]
    fn invalid_page_is_not_rendered() {
        let page = Page::new("bad", "bad")
            .panel(Panel::new().widget(Widget::slider("a", "", 1.0, 0.0, 0.5, 0.1)));
        assert!(matches!(render_page(&page), Err(PlotError::InvalidSlider { .. })));
    }

    #[test]
    fn write_page_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("html");
        let path = write_page(&scene::by_slug("10-receptors-dr").unwrap(), &out).unwrap();
        assert_eq!(path, out.join("10-receptors-dr.html"));
        let html = fs::read_to_string(path).unwrap();
        assert!(html.contains("<title>Dose Response</title>"));
    }

    #[test]
    fn fill_does_not_rescan_inserted_text() {
        let out = fill("[{{a}}|{{b}}]", &[("{{a}}", "{{b}}"), ("{{b}}", "B")]);
        assert_eq!(out, "[{{b}}|B]");
    }
}
