use serde::Deserialize;
use uswds_components::{AccordionSpec, PanelSpec};
use uswds_wasm::{render_accordion, render_accordion_html, render_accordion_item};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[derive(Deserialize, Debug)]
struct RenderResult {
    markup: String,
    warnings: Vec<String>,
}

fn amendments() -> JsValue {
    let spec = AccordionSpec::new("a")
        .with_variant("bordered")
        .with_multiselectable(true)
        .with_item(PanelSpec::new("1", "1st Amendment", "Religion and Expression"))
        .with_item(PanelSpec::new("2", "2nd Amendment", "Bearing Arms").expanded(true));
    serde_wasm_bindgen::to_value(&spec).expect("serialize spec")
}

fn options(strict: bool, format: &str) -> JsValue {
    #[derive(serde::Serialize)]
    struct Options<'a> {
        strict: bool,
        format: &'a str,
    }
    serde_wasm_bindgen::to_value(&Options { strict, format }).expect("serialize options")
}

#[wasm_bindgen_test]
fn render_html_string() {
    let html = render_accordion_html(amendments()).expect("render should succeed");
    assert!(html.starts_with(
        r#"<div class="usa-accordion usa-accordion--bordered" aria-multiselectable="true">"#
    ));
    assert!(html.contains(r#"aria-expanded="true" aria-controls="a2""#));
    assert!(html.contains(r#"<div id="a1" class="usa-accordion__content usa-prose">"#));
}

#[wasm_bindgen_test]
fn render_with_default_options() {
    let result = render_accordion(amendments(), JsValue::UNDEFINED).expect("render should succeed");
    let result: RenderResult = serde_wasm_bindgen::from_value(result).expect("deserialize result");

    assert!(result.markup.contains(r#"aria-expanded="false" aria-controls="a1""#));
    assert!(result.warnings.is_empty());
}

#[wasm_bindgen_test]
fn render_jsx() {
    let result = render_accordion(amendments(), options(false, "jsx")).expect("render should succeed");
    let result: RenderResult = serde_wasm_bindgen::from_value(result).expect("deserialize result");

    assert!(result.markup.contains("aria-multiselectable={true}"));
    assert!(result.markup.contains("<><h2"));
}

#[wasm_bindgen_test]
fn strict_rejects_duplicate_ids() {
    let spec = AccordionSpec::new("a")
        .with_item(PanelSpec::new("1", "One", "First"))
        .with_item(PanelSpec::new("1", "Two", "Second"));
    let config = serde_wasm_bindgen::to_value(&spec).expect("serialize spec");
    assert!(render_accordion(config, options(true, "html")).is_err());
}

#[wasm_bindgen_test]
fn permissive_reports_warnings() {
    let spec = AccordionSpec::new("a")
        .with_item(PanelSpec::new("1", "One", "First").expanded(true))
        .with_item(PanelSpec::new("2", "Two", "Second").expanded(true));
    let config = serde_wasm_bindgen::to_value(&spec).expect("serialize spec");
    let result = render_accordion(config, JsValue::NULL).expect("render should succeed");
    let result: RenderResult = serde_wasm_bindgen::from_value(result).expect("deserialize result");

    assert_eq!(result.warnings.len(), 1);
}

#[wasm_bindgen_test]
fn render_single_item() {
    let item = serde_wasm_bindgen::to_value(&PanelSpec::new("3", "Third", "Quartering"))
        .expect("serialize item");
    let result = render_accordion_item(item, "q", JsValue::UNDEFINED).expect("render should succeed");
    let result: RenderResult = serde_wasm_bindgen::from_value(result).expect("deserialize result");

    assert!(result.markup.starts_with(r#"<h2 class="usa-accordion__heading">"#));
    assert!(result.markup.contains(r#"<div id="q3""#));
}
