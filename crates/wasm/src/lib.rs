use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;
use uswds_components::{
    AccordionSpec, PanelSpec, RenderOptions, RenderOutput, Validation, render_accordion_with,
    render_item_with,
};
use uswds_core::{MarkupFormat, Node};

// ============================================================================
// Render Config
// ============================================================================

/// Options accepted by the WASM render functions.
/// Mirrors the NAPI `RenderConfig` for parity.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WasmRenderConfig {
    #[serde(default)]
    pub strict: Option<bool>,
    #[serde(default)]
    pub format: Option<MarkupFormat>,
}

fn parse_config(config: JsValue) -> Result<WasmRenderConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(WasmRenderConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
}

fn build_render_options(cfg: &WasmRenderConfig) -> RenderOptions {
    RenderOptions {
        validation: if cfg.strict.unwrap_or(false) {
            Validation::Strict
        } else {
            Validation::Permissive
        },
    }
}

fn parse_spec<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsError::new(&format!("invalid configuration: {}", e)))
}

// ============================================================================
// Render API
// ============================================================================

/// Result of rendering a component.
#[derive(Debug, Clone, Serialize)]
pub struct RenderResult {
    /// Serialized markup (HTML or JSX).
    pub markup: String,
    /// The markup tree.
    pub tree: Node,
    /// Non-fatal findings, one message each.
    pub warnings: Vec<String>,
}

fn to_js(output: RenderOutput, format: MarkupFormat) -> Result<JsValue, JsError> {
    let result = RenderResult {
        markup: output.markup(format),
        warnings: output.diagnostics.messages(),
        tree: output.node,
    };
    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Renders an accordion configuration.
///
/// # Arguments
///
/// * `config` - Accordion configuration object
///   (`{variant?, multiselectable?, id_prefix | idPrefix, items}`)
/// * `options` - Optional `{strict?: boolean, format?: "html" | "jsx"}`
///
/// # Returns
///
/// Returns `{markup, tree, warnings}`.
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { render_accordion } from './uswds_wasm';
///
/// const { markup } = render_accordion({
///   variant: "bordered",
///   multiselectable: true,
///   id_prefix: "a",
///   items: [{ expanded: false, id: "1", title: "1st Amendment", content: "Religion and Expression" }],
/// });
/// ```
#[wasm_bindgen]
pub fn render_accordion(config: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let cfg = parse_config(options)?;
    let spec: AccordionSpec = parse_spec(config)?;
    let output = render_accordion_with(&spec, &build_render_options(&cfg))
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(output, cfg.format.unwrap_or_default())
}

/// Renders an accordion configuration straight to an HTML string (permissive).
#[wasm_bindgen]
pub fn render_accordion_html(config: JsValue) -> Result<String, JsError> {
    let spec: AccordionSpec = parse_spec(config)?;
    let output = render_accordion_with(&spec, &RenderOptions::default())
        .map_err(|e| JsError::new(&e.to_string()))?;
    Ok(output.markup(MarkupFormat::Html))
}

/// Renders a single accordion panel (heading and content region, no container).
#[wasm_bindgen]
pub fn render_accordion_item(
    item: JsValue,
    id_prefix: &str,
    options: JsValue,
) -> Result<JsValue, JsError> {
    let cfg = parse_config(options)?;
    let item: PanelSpec = parse_spec(item)?;
    let output = render_item_with(&item, id_prefix, &build_render_options(&cfg))
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(output, cfg.format.unwrap_or_default())
}
