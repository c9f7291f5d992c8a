//! USWDS accordion component.
//!
//! # Module Structure
//!
//! - `types` - Configuration (AccordionSpec, PanelSpec)
//! - `item` - Single panel rendering
//! - `validate` - Input checks for strict/permissive rendering

mod item;
mod types;
mod validate;

pub use item::render_item;
pub use types::{AccordionSpec, PanelSpec};
pub use validate::validate;

use crate::RenderOutput;
use crate::options::RenderOptions;
use uswds_core::{ClassList, ComponentError, Element, Node};

/// Container class.
pub const ACCORDION_CLASS: &str = "usa-accordion";
/// Class of each panel's heading.
pub const HEADING_CLASS: &str = "usa-accordion__heading";
/// Class of each panel's toggle button.
pub const BUTTON_CLASS: &str = "usa-accordion__button";
/// Classes of each panel's content region.
pub const CONTENT_CLASS: &str = "usa-accordion__content usa-prose";

/// Container class list: `usa-accordion` plus an optional `usa-accordion--{variant}`.
pub fn container_classes(spec: &AccordionSpec) -> ClassList {
    ClassList::new(ACCORDION_CLASS).with_modifier(ACCORDION_CLASS, spec.variant_name())
}

/// Renders an accordion (permissive; never fails).
///
/// Each item becomes one fragment child of the container, in input order.
///
/// # Examples
///
/// ```
/// use uswds_components::accordion::{AccordionSpec, PanelSpec, render_accordion};
/// use uswds_core::to_html;
///
/// let spec = AccordionSpec::new("a")
///     .with_variant("bordered")
///     .with_item(PanelSpec::new("1", "1st Amendment", "Religion and Expression"));
/// let html = to_html(&render_accordion(&spec));
/// assert!(html.starts_with(r#"<div class="usa-accordion usa-accordion--bordered" aria-multiselectable="false">"#));
/// ```
pub fn render_accordion(spec: &AccordionSpec) -> Node {
    log::debug!(
        "rendering accordion `{}` with {} item(s)",
        spec.id_prefix,
        spec.items.len()
    );

    Element::new("div")
        .attr("class", container_classes(spec))
        .bool_attr("aria-multiselectable", spec.multiselectable)
        .children(
            spec.items
                .iter()
                .map(|item| render_item(item, &spec.id_prefix)),
        )
        .into()
}

/// Validates, then renders an accordion.
///
/// Warnings are returned alongside the tree; in strict mode invalid input is
/// rejected before anything is rendered.
pub fn render_accordion_with(
    spec: &AccordionSpec,
    options: &RenderOptions,
) -> Result<RenderOutput, ComponentError> {
    let diagnostics = validate(spec, options.validation)?;
    Ok(RenderOutput {
        node: render_accordion(spec),
        diagnostics,
    })
}

/// Validates, then renders a single panel without a container.
///
/// The panel is checked exactly as an accordion holding only that panel
/// would be.
pub fn render_item_with(
    panel: &PanelSpec,
    id_prefix: &str,
    options: &RenderOptions,
) -> Result<RenderOutput, ComponentError> {
    let spec = AccordionSpec::new(id_prefix).with_item(panel.clone());
    let diagnostics = validate(&spec, options.validation)?;
    Ok(RenderOutput {
        node: render_item(panel, id_prefix),
        diagnostics,
    })
}
