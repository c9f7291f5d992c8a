#![deny(missing_docs)]
//! uswds core: markup tree, HTML/JSX serializers, class helpers and diagnostics.

/// BEM class-name helpers.
pub mod classes;
/// Error and diagnostic types.
pub mod error;
/// Typed markup tree.
pub mod markup;
/// HTML and JSX serialization.
pub mod serialize;

pub use classes::{ClassList, modifier_class};
pub use error::{ComponentError, RenderDiagnostics, RenderWarning};
pub use markup::{AttrValue, Attribute, Element, Node};
pub use serialize::{MarkupFormat, serialize, to_html, to_jsx};
