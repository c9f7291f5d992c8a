use std::fmt;

/// Builds a BEM modifier class, e.g. `usa-accordion--bordered`.
///
/// # Examples
///
/// ```
/// use uswds_core::classes::modifier_class;
///
/// assert_eq!(modifier_class("usa-accordion", "bordered"), "usa-accordion--bordered");
/// ```
pub fn modifier_class(block: &str, modifier: &str) -> String {
    format!("{block}--{modifier}")
}

/// Normalizes an optional modifier name: blank values count as absent.
pub fn normalize_modifier(modifier: Option<&str>) -> Option<&str> {
    modifier.map(str::trim).filter(|m| !m.is_empty())
}

/// Space-separated list of CSS classes.
///
/// Never renders leading, trailing or doubled separators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Creates a list holding one base class.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            classes: vec![base.into()],
        }
    }

    /// Appends a class. Empty names are skipped.
    pub fn with(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() {
            self.classes.push(class);
        }
        self
    }

    /// Appends `{block}--{modifier}` when a non-blank modifier is given.
    pub fn with_modifier(self, block: &str, modifier: Option<&str>) -> Self {
        match normalize_modifier(modifier) {
            Some(m) => self.with(modifier_class(block, m)),
            None => self,
        }
    }

    /// Returns the classes in order.
    pub fn as_slice(&self) -> &[String] {
        &self.classes
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

impl From<ClassList> for String {
    fn from(list: ClassList) -> Self {
        list.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_only() {
        assert_eq!(ClassList::new("usa-accordion").to_string(), "usa-accordion");
    }

    #[test]
    fn modifier_appended() {
        let list = ClassList::new("usa-accordion").with_modifier("usa-accordion", Some("bordered"));
        assert_eq!(list.to_string(), "usa-accordion usa-accordion--bordered");
    }

    #[test]
    fn blank_modifier_is_absent() {
        for modifier in [None, Some(""), Some("   ")] {
            let list = ClassList::new("usa-accordion").with_modifier("usa-accordion", modifier);
            assert_eq!(list.to_string(), "usa-accordion", "modifier {:?}", modifier);
        }
    }

    #[test]
    fn empty_class_skipped() {
        let list = ClassList::new("a").with("").with("b");
        assert_eq!(list.as_slice(), ["a", "b"]);
        assert_eq!(String::from(list), "a b");
    }
}
