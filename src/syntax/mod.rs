//! Syntax highlighting module
//!
//! Provides regex-based highlighting of code blocks:
//! - Language lookup from `data-language` tags
//! - Ordered per-language pattern tables (profiles)
//! - HTML escaping followed by cumulative span substitution
//!
//! ## Pipeline
//!
//! ```text
//! code → escape (& < >) → profile pass 1 → pass 2 → … → HTML with <span class="…">
//! ```
//!
//! ## Supported Languages
//!
//! - PowerShell
//! - SQL
//! - KQL
//! - Bash
//! - JSON
//! - XML

mod blocks;
mod highlighter;
mod highlights;
mod languages;
mod profiles;

pub use blocks::{highlight_code_blocks, CODE_BLOCK_CLASS};
pub use highlighter::{builtin_highlighter, highlight, Highlighter};
pub use highlights::{ClassTag, HIGHLIGHT_NAMES};
pub use languages::LanguageId;
pub use profiles::{patterns_for, Matcher, PatternDef, Profile};
