#![deny(missing_docs)]
//! Node.js bindings that surface the USWDS component renderers.

use napi_derive::napi;
use serde_json::Value as JsonValue;
use uswds_components::{AccordionSpec, PanelSpec, render_accordion_with, render_item_with};
use uswds_core::ComponentError;

/// NAPI-exposed data structures.
pub mod types;
pub use types::*;

fn to_napi_error(err: ComponentError) -> napi::Error {
    napi::Error::from_reason(err.to_string())
}

fn parse_value<T: serde::de::DeserializeOwned>(value: JsonValue) -> napi::Result<T> {
    serde_json::from_value(value).map_err(|e| to_napi_error(ComponentError::Json(e)))
}

/// Renders an accordion configuration.
///
/// `config` follows the accordion schema:
/// `{ variant?, multiselectable?, id_prefix | idPrefix, items: [{ expanded?, id, title, content }] }`.
#[napi]
pub fn render_accordion(
    config: JsonValue,
    options: Option<RenderConfig>,
) -> napi::Result<RenderResult> {
    let spec: AccordionSpec = parse_value(config)?;
    let options = options.unwrap_or_default();
    let output = render_accordion_with(&spec, &options.render_options()).map_err(to_napi_error)?;
    RenderResult::from_output(output, options.markup_format())
}

/// Renders a single accordion panel (heading and content region, no container).
#[napi]
pub fn render_accordion_item(
    item: JsonValue,
    id_prefix: Option<String>,
    options: Option<RenderConfig>,
) -> napi::Result<RenderResult> {
    let item: PanelSpec = parse_value(item)?;
    let options = options.unwrap_or_default();
    let output = render_item_with(
        &item,
        id_prefix.as_deref().unwrap_or_default(),
        &options.render_options(),
    )
    .map_err(to_napi_error)?;
    RenderResult::from_output(output, options.markup_format())
}
