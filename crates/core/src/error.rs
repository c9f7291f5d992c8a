use thiserror::Error;

/// Errors raised by validated rendering and configuration loading.
#[derive(Debug, Error)]
pub enum ComponentError {
    /// A required item field (`id`, `title` or `content`) is absent.
    #[error("item {index} is missing required field `{field}`")]
    MissingField {
        /// Zero-based index of the item.
        index: usize,
        /// Field name.
        field: &'static str,
    },
    /// Two items produce the same element id after prefixing.
    #[error("items {first} and {second} share the element id `{id}`")]
    DuplicateId {
        /// The prefixed id.
        id: String,
        /// Index of the first item using it.
        first: usize,
        /// Index of the later item using it.
        second: usize,
    },
    /// The variant name would produce more than one class.
    #[error("invalid variant `{0}`: variant names cannot contain whitespace")]
    InvalidVariant(String),
    /// Configuration JSON could not be decoded.
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// Configuration YAML could not be decoded.
    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Non-fatal findings that don't prevent rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderWarning {
    /// A required item field is absent and was rendered as empty.
    MissingField {
        /// Zero-based index of the item.
        index: usize,
        /// Field name.
        field: &'static str,
    },
    /// Two items produce the same element id.
    DuplicateId {
        /// The prefixed id.
        id: String,
        /// Index of the first item using it.
        first: usize,
        /// Index of the later item using it.
        second: usize,
    },
    /// The variant contains whitespace and expands to several classes.
    SuspiciousVariant {
        /// The variant as given.
        variant: String,
    },
    /// More than one item is expanded while multiselect is off.
    MultipleExpanded {
        /// Number of expanded items.
        count: usize,
    },
}

impl std::fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderWarning::MissingField { index, field } => {
                write!(f, "item {} has no `{}`; rendered as empty", index, field)
            }
            RenderWarning::DuplicateId { id, first, second } => {
                write!(f, "items {} and {} share the element id `{}`", first, second, id)
            }
            RenderWarning::SuspiciousVariant { variant } => {
                write!(f, "variant `{}` contains whitespace", variant)
            }
            RenderWarning::MultipleExpanded { count } => {
                write!(
                    f,
                    "{} items are expanded but the accordion is not multiselectable",
                    count
                )
            }
        }
    }
}

/// Collection of warnings gathered while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderDiagnostics {
    /// Warnings in the order they were found.
    pub warnings: Vec<RenderWarning>,
}

impl RenderDiagnostics {
    /// Create a new empty diagnostics collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: RenderWarning) {
        self.warnings.push(warning);
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Get the number of warnings
    pub fn count(&self) -> usize {
        self.warnings.len()
    }

    /// Warning messages, for binding layers.
    pub fn messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}
