//! Input checks for validated accordion rendering.

use super::types::{AccordionSpec, PanelSpec};
use crate::options::Validation;
use std::collections::HashMap;
use uswds_core::{ComponentError, RenderDiagnostics, RenderWarning};

/// Checks an accordion configuration.
///
/// In permissive mode every finding becomes a warning. In strict mode the
/// first missing field, duplicate id or malformed variant (in item order,
/// variant first) is returned as an error. Several expanded panels on a
/// non-multiselectable accordion is always a warning.
pub fn validate(
    spec: &AccordionSpec,
    validation: Validation,
) -> Result<RenderDiagnostics, ComponentError> {
    let strict = validation == Validation::Strict;
    let mut diagnostics = RenderDiagnostics::new();

    if let Some(variant) = spec.variant_name()
        && variant.chars().any(char::is_whitespace)
    {
        if strict {
            return Err(ComponentError::InvalidVariant(variant.to_string()));
        }
        diagnostics.add_warning(RenderWarning::SuspiciousVariant {
            variant: variant.to_string(),
        });
    }

    let mut seen: HashMap<String, usize> = HashMap::with_capacity(spec.items.len());
    for (index, item) in spec.items.iter().enumerate() {
        for field in missing_fields(item) {
            if strict {
                return Err(ComponentError::MissingField { index, field });
            }
            diagnostics.add_warning(RenderWarning::MissingField { index, field });
        }

        let id = item.target_id(&spec.id_prefix);
        if let Some(&first) = seen.get(&id) {
            if strict {
                return Err(ComponentError::DuplicateId {
                    id,
                    first,
                    second: index,
                });
            }
            diagnostics.add_warning(RenderWarning::DuplicateId {
                id,
                first,
                second: index,
            });
        } else {
            seen.insert(id, index);
        }
    }

    let expanded = spec.items.iter().filter(|item| item.expanded).count();
    if !spec.multiselectable && expanded > 1 {
        diagnostics.add_warning(RenderWarning::MultipleExpanded { count: expanded });
    }

    for warning in &diagnostics.warnings {
        log::warn!("accordion `{}`: {}", spec.id_prefix, warning);
    }

    Ok(diagnostics)
}

fn missing_fields(item: &PanelSpec) -> impl Iterator<Item = &'static str> {
    [
        ("id", item.id.is_none()),
        ("title", item.title.is_none()),
        ("content", item.content.is_none()),
    ]
    .into_iter()
    .filter_map(|(field, missing)| missing.then_some(field))
}
