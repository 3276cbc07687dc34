//! Highlight classes and span markup
//!
//! Defines the semantic class tags attached to matched spans.

use std::fmt;

/// Class names emitted into `<span class="...">`.
/// Index into this array is the discriminant of [`ClassTag`].
pub const HIGHLIGHT_NAMES: &[&str] = &[
    "comment",  // line and block comments
    "keyword",  // language keywords, XML tag delimiters
    "string",   // quoted literals
    "variable", // $vars, JSON keys, XML attribute names
    "number",   // numeric literals
];

/// Semantic category of a highlighted span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassTag {
    Comment,
    Keyword,
    String,
    Variable,
    Number,
}

impl ClassTag {
    /// CSS class name for this tag
    pub fn class_name(&self) -> &'static str {
        HIGHLIGHT_NAMES[*self as usize]
    }

    /// Look up a tag by its class name
    pub fn from_class_name(name: &str) -> Option<Self> {
        match name {
            "comment" => Some(ClassTag::Comment),
            "keyword" => Some(ClassTag::Keyword),
            "string" => Some(ClassTag::String),
            "variable" => Some(ClassTag::Variable),
            "number" => Some(ClassTag::Number),
            _ => None,
        }
    }

    /// Wrap already-escaped text in a span carrying this class
    pub fn wrap(&self, text: &str) -> String {
        format!(r#"<span class="{}">{}</span>"#, self.class_name(), text)
    }
}

impl fmt::Display for ClassTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_lookup() {
        assert_eq!(ClassTag::Comment.class_name(), "comment");
        assert_eq!(ClassTag::Number.class_name(), "number");
        assert_eq!(ClassTag::from_class_name("variable"), Some(ClassTag::Variable));
        assert_eq!(ClassTag::from_class_name("tag"), None);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(
            ClassTag::Keyword.wrap("SELECT"),
            r#"<span class="keyword">SELECT</span>"#
        );
    }
}
