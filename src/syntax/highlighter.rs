//! Escape-then-substitute highlighter

use std::collections::HashMap;
use std::sync::OnceLock;

use super::languages::LanguageId;
use super::profiles::Profile;
use crate::util::text::escape_html;

/// Profile table keyed by language
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    profiles: HashMap<LanguageId, Profile>,
}

impl Highlighter {
    /// An empty table; every language passes through unchanged
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding every built-in profile.
    ///
    /// A profile that fails to compile is logged and left out, so its
    /// language falls back to pass-through.
    pub fn builtin() -> Self {
        let mut highlighter = Self::new();
        for lang in LanguageId::ALL {
            match Profile::builtin(lang) {
                Ok(profile) => highlighter.insert(profile),
                Err(e) => tracing::error!("Skipping highlight profile: {}", e),
            }
        }
        highlighter
    }

    /// Add or replace the profile for its language
    pub fn insert(&mut self, profile: Profile) {
        self.profiles.insert(profile.language(), profile);
    }

    pub fn profile(&self, language: LanguageId) -> Option<&Profile> {
        self.profiles.get(&language)
    }

    /// Languages with a profile, in stable order
    pub fn languages(&self) -> Vec<LanguageId> {
        let mut languages: Vec<_> = self.profiles.keys().copied().collect();
        languages.sort();
        languages
    }

    /// Resolve a `data-language` tag to a profile, ignoring case
    pub fn resolve(&self, language: &str) -> Option<&Profile> {
        LanguageId::from_name(language).and_then(|lang| self.profile(lang))
    }

    /// Highlight `code` as `language`.
    ///
    /// Unknown languages return `code` unchanged, without escaping.
    pub fn highlight(&self, code: &str, language: &str) -> String {
        match self.resolve(language) {
            Some(profile) => profile.apply(&escape_html(code)),
            None => code.to_string(),
        }
    }
}

/// Shared highlighter built from the built-in profile table
pub fn builtin_highlighter() -> &'static Highlighter {
    static HIGHLIGHTER: OnceLock<Highlighter> = OnceLock::new();
    HIGHLIGHTER.get_or_init(Highlighter::builtin)
}

/// Highlight with the built-in profile table
pub fn highlight(code: &str, language: &str) -> String {
    builtin_highlighter().highlight(code, language)
}
