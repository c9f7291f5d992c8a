//! Rendering options shared by all components.

use serde::{Deserialize, Serialize};

/// How input problems are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Render whatever is given; problems become warnings.
    #[default]
    Permissive,
    /// Reject missing fields, duplicate ids and malformed variants.
    Strict,
}

/// Options for validated rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Validation mode.
    #[serde(default)]
    pub validation: Validation,
}

impl RenderOptions {
    /// Options with strict validation.
    pub fn strict() -> Self {
        Self {
            validation: Validation::Strict,
        }
    }

    /// Returns whether strict validation is enabled.
    pub fn is_strict(&self) -> bool {
        self.validation == Validation::Strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_permissive() {
        let options: RenderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, RenderOptions::default());
        assert!(!options.is_strict());
    }

    #[test]
    fn strict_from_json() {
        let options: RenderOptions = serde_json::from_str(r#"{"validation": "strict"}"#).unwrap();
        assert!(options.is_strict());
        assert_eq!(options, RenderOptions::strict());
    }
}
