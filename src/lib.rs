//! docsite - interactive documentation pages
//!
//! This crate provides a regex syntax highlighter and the page behaviours of
//! a static documentation site (menu, tabs, accordions, copy buttons, filter,
//! TOC, scroll spy, theme) implementing the Elm Architecture pattern over a
//! small element tree.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod dom;
pub mod events;
pub mod init;
pub mod markdown;
pub mod messages;
pub mod model;
pub mod nav;
pub mod runtime;
pub mod site;
pub mod storage;
pub mod syntax;
pub mod theme;
pub mod toc;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::SiteConfig;
pub use dom::{ElementId, Page};
pub use messages::Msg;
pub use model::PageModel;
pub use runtime::Runtime;
pub use syntax::{highlight, Highlighter};
pub use theme::ThemeMode;
