//! NAPI-exposed data structures.

use napi_derive::napi;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use uswds_components::{RenderOptions, RenderOutput, Validation};
use uswds_core::MarkupFormat;

/// Options accepted by the render functions.
#[napi(object)]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderConfig {
    /// Rejects missing fields, duplicate ids and malformed variants instead of warning.
    pub strict: Option<bool>,
    /// Markup syntax of `RenderResult.markup` (defaults to HTML).
    pub format: Option<OutputFormat>,
}

impl RenderConfig {
    pub(crate) fn render_options(&self) -> RenderOptions {
        RenderOptions {
            validation: if self.strict.unwrap_or(false) {
                Validation::Strict
            } else {
                Validation::Permissive
            },
        }
    }

    pub(crate) fn markup_format(&self) -> MarkupFormat {
        match self.format {
            Some(OutputFormat::Jsx) => MarkupFormat::Jsx,
            Some(OutputFormat::Html) | None => MarkupFormat::Html,
        }
    }
}

/// Markup syntaxes the renderer can emit.
///
/// JS values are `"html"` and `"jsx"`, matching the wasm binding.
#[napi(string_enum = "lowercase")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML text.
    Html,
    /// JSX source.
    Jsx,
}

/// Rendered component.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// Serialized markup.
    pub markup: String,
    /// The markup tree as JSON (`{type: "element", tag, attributes, children}`).
    pub tree: JsonValue,
    /// Non-fatal findings, one message each.
    pub warnings: Vec<String>,
}

impl RenderResult {
    pub(crate) fn from_output(output: RenderOutput, format: MarkupFormat) -> napi::Result<Self> {
        let tree = serde_json::to_value(&output.node)
            .map_err(|e| napi::Error::from_reason(format!("Serialization error: {}", e)))?;
        Ok(Self {
            markup: output.markup(format),
            tree,
            warnings: output.diagnostics.messages(),
        })
    }
}
