//! Accordion configuration types.

use serde::{Deserialize, Deserializer, Serialize};
use uswds_core::ComponentError;
use uswds_core::classes::normalize_modifier;

/// One expandable panel.
///
/// `id`, `title` and `content` are optional so that the permissive renderer
/// can accept incomplete configuration; absent values render as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSpec {
    /// Whether the panel's button is marked expanded. Absent or `null` is `false`.
    #[serde(default, deserialize_with = "null_as_false")]
    pub expanded: bool,
    /// Identifier fragment, unique within one accordion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Button label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body text of the content region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl PanelSpec {
    /// Creates a collapsed panel with all required fields set.
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            expanded: false,
            id: Some(id.into()),
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    /// Sets the expanded flag.
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// The element id linking button and content region: `id_prefix + id`.
    pub fn target_id(&self, id_prefix: &str) -> String {
        format!("{}{}", id_prefix, self.id.as_deref().unwrap_or_default())
    }
}

/// Top-level accordion configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionSpec {
    /// Style modifier, e.g. `bordered`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Whether several panels may be open at once (advisory).
    #[serde(default, deserialize_with = "null_as_false")]
    pub multiselectable: bool,
    /// Prepended to every panel id.
    #[serde(default, alias = "idPrefix")]
    pub id_prefix: String,
    /// Panels, in display order.
    #[serde(default)]
    pub items: Vec<PanelSpec>,
}

impl AccordionSpec {
    /// Creates an empty accordion with the given id prefix.
    pub fn new(id_prefix: impl Into<String>) -> Self {
        Self {
            id_prefix: id_prefix.into(),
            ..Default::default()
        }
    }

    /// Sets the style variant.
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Sets the multiselectable flag.
    pub fn with_multiselectable(mut self, multiselectable: bool) -> Self {
        self.multiselectable = multiselectable;
        self
    }

    /// Appends a panel.
    pub fn with_item(mut self, item: PanelSpec) -> Self {
        self.items.push(item);
        self
    }

    /// The variant if it is present and not blank.
    pub fn variant_name(&self) -> Option<&str> {
        normalize_modifier(self.variant.as_deref())
    }

    /// Parses a configuration from JSON.
    pub fn from_json(input: &str) -> Result<Self, ComponentError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parses a configuration from YAML.
    pub fn from_yaml(input: &str) -> Result<Self, ComponentError> {
        Ok(serde_yaml::from_str(input)?)
    }
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_defaults() {
        let spec = AccordionSpec::from_json(r#"{"items": [{"id": "1"}]}"#).unwrap();
        assert_eq!(spec.variant, None);
        assert!(!spec.multiselectable);
        assert_eq!(spec.id_prefix, "");
        assert_eq!(spec.items.len(), 1);
        assert!(!spec.items[0].expanded);
        assert_eq!(spec.items[0].title, None);
    }

    #[test]
    fn json_accepts_camel_case_prefix_and_nulls() {
        let spec = AccordionSpec::from_json(
            r#"{"idPrefix": "faq-", "multiselectable": null, "items": [{"expanded": null}]}"#,
        )
        .unwrap();
        assert_eq!(spec.id_prefix, "faq-");
        assert!(!spec.multiselectable);
        assert!(!spec.items[0].expanded);
    }

    #[test]
    fn json_rejects_truthy_non_booleans() {
        let err = AccordionSpec::from_json(r#"{"items": [{"expanded": "yes"}]}"#).unwrap_err();
        assert!(matches!(err, ComponentError::Json(_)));
        let err = AccordionSpec::from_json(r#"{"items": [{"expanded": 1}]}"#).unwrap_err();
        assert!(matches!(err, ComponentError::Json(_)));
    }

    #[test]
    fn yaml_config() {
        let input = "\
variant: bordered
multiselectable: true
id_prefix: a
items:
  - id: \"1\"
    title: 1st Amendment
    content: Religion and Expression
  - expanded: true
    id: \"2\"
    title: 2nd Amendment
    content: Bearing Arms
";
        let spec = AccordionSpec::from_yaml(input).unwrap();
        assert_eq!(spec.variant_name(), Some("bordered"));
        assert!(spec.multiselectable);
        assert_eq!(spec.items[1], PanelSpec::new("2", "2nd Amendment", "Bearing Arms").expanded(true));
    }

    #[test]
    fn yaml_errors_convert() {
        let err = AccordionSpec::from_yaml("items: [").unwrap_err();
        assert!(matches!(err, ComponentError::Yaml(_)));
    }

    #[test]
    fn blank_variant_is_absent() {
        assert_eq!(AccordionSpec::new("a").with_variant("").variant_name(), None);
        assert_eq!(AccordionSpec::new("a").with_variant(" ").variant_name(), None);
        assert_eq!(AccordionSpec::new("a").variant_name(), None);
    }

    #[test]
    fn target_id_concatenates() {
        assert_eq!(PanelSpec::new("1", "t", "c").target_id("a"), "a1");
        assert_eq!(PanelSpec::new("1", "t", "c").target_id(""), "1");
        assert_eq!(PanelSpec::default().target_id("a"), "a");
    }

    #[test]
    fn serializes_without_absent_fields() {
        let spec = AccordionSpec::new("a").with_item(PanelSpec {
            id: Some("1".into()),
            ..Default::default()
        });
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "multiselectable": false,
                "id_prefix": "a",
                "items": [{ "expanded": false, "id": "1" }]
            })
        );
    }
}
