#![deny(missing_docs)]
//! USWDS components rendered to a typed markup tree.

/// Accordion component.
pub mod accordion;
/// Rendering options.
pub mod options;

pub use accordion::{
    AccordionSpec, PanelSpec, render_accordion, render_accordion_with, render_item,
    render_item_with,
};
pub use options::{RenderOptions, Validation};

use uswds_core::{MarkupFormat, Node, RenderDiagnostics, serialize};

/// A rendered tree plus any warnings found while validating its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    /// The rendered markup tree.
    pub node: Node,
    /// Non-fatal findings.
    pub diagnostics: RenderDiagnostics,
}

impl RenderOutput {
    /// Serializes the tree in the given format.
    pub fn markup(&self, format: MarkupFormat) -> String {
        serialize(&self.node, format)
    }
}
