//! Utility modules

pub mod text;

pub use text::{decode_entities, escape_attribute, escape_html, markup_to_text, strip_tags};
