//! Markdown documentation pages
//!
//! Builds a [`crate::dom::Page`] from markdown inside the documentation
//! shell the page behaviours expect.

mod builder;
mod shell;

pub use builder::{append_code_block, append_markdown, markdown_options};
pub use shell::{build_page, markdown_title, DocShell, NavEntry, NavSection};
