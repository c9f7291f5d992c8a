//! Single panel rendering.

use super::types::PanelSpec;
use super::{BUTTON_CLASS, CONTENT_CLASS, HEADING_CLASS};
use uswds_core::{Element, Node};

/// Renders one panel as a fragment of heading and content region.
///
/// The button's `aria-controls` and the region's `id` are both
/// `id_prefix + panel.id`. Absent text fields render as empty strings.
///
/// # Examples
///
/// ```
/// use uswds_components::accordion::{PanelSpec, render_item};
/// use uswds_core::to_html;
///
/// let panel = PanelSpec::new("1", "1st Amendment", "Religion and Expression");
/// let html = to_html(&render_item(&panel, "a"));
/// assert!(html.contains(r#"aria-controls="a1""#));
/// assert!(html.contains(r#"<div id="a1""#));
/// ```
pub fn render_item(panel: &PanelSpec, id_prefix: &str) -> Node {
    let target = panel.target_id(id_prefix);

    let button = Element::new("button")
        .attr("class", BUTTON_CLASS)
        .bool_attr("aria-expanded", panel.expanded)
        .attr("aria-controls", target.clone())
        .child(Node::text(panel.title.as_deref().unwrap_or_default()));

    let heading = Element::new("h2").attr("class", HEADING_CLASS).child(button);

    let region = Element::new("div")
        .attr("id", target)
        .attr("class", CONTENT_CLASS)
        .child(Element::new("p").child(Node::text(
            panel.content.as_deref().unwrap_or_default(),
        )));

    Node::fragment([heading.into(), region.into()])
}
