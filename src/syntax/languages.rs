//! Language identification for code blocks
//!
//! Maps `data-language` tags to language IDs and provides language metadata.

use std::fmt;

/// Languages with a highlight profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageId {
    PowerShell,
    Sql,
    Kql,
    Bash,
    Json,
    Xml,
}

impl LanguageId {
    /// Every supported language, in profile-table order
    pub const ALL: [LanguageId; 6] = [
        LanguageId::PowerShell,
        LanguageId::Sql,
        LanguageId::Kql,
        LanguageId::Bash,
        LanguageId::Json,
        LanguageId::Xml,
    ];

    /// Resolve a language tag, ignoring case.
    ///
    /// Returns `None` for tags without a profile; callers treat that as
    /// plain text.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "powershell" => Some(LanguageId::PowerShell),
            "sql" => Some(LanguageId::Sql),
            "kql" => Some(LanguageId::Kql),
            "bash" => Some(LanguageId::Bash),
            "json" => Some(LanguageId::Json),
            "xml" => Some(LanguageId::Xml),
            _ => None,
        }
    }

    /// Lowercase tag as written in `data-language`
    pub fn name(&self) -> &'static str {
        match self {
            LanguageId::PowerShell => "powershell",
            LanguageId::Sql => "sql",
            LanguageId::Kql => "kql",
            LanguageId::Bash => "bash",
            LanguageId::Json => "json",
            LanguageId::Xml => "xml",
        }
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::PowerShell => "PowerShell",
            LanguageId::Sql => "SQL",
            LanguageId::Kql => "KQL",
            LanguageId::Bash => "Bash",
            LanguageId::Json => "JSON",
            LanguageId::Xml => "XML",
        }
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(LanguageId::from_name("sql"), Some(LanguageId::Sql));
        assert_eq!(LanguageId::from_name("SQL"), Some(LanguageId::Sql));
        assert_eq!(
            LanguageId::from_name("PowerShell"),
            Some(LanguageId::PowerShell)
        );
        assert_eq!(LanguageId::from_name("kql"), Some(LanguageId::Kql));
        assert_eq!(LanguageId::from_name("rust"), None);
        assert_eq!(LanguageId::from_name(""), None);
    }

    #[test]
    fn test_name_round_trips() {
        for lang in LanguageId::ALL {
            assert_eq!(LanguageId::from_name(lang.name()), Some(lang));
        }
    }
}
