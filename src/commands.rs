//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The [`crate::runtime::Runtime`] executes them against the platform.

use std::time::Duration;

use crate::dom::ElementId;
use crate::messages::Msg;
use crate::theme::ThemeMode;

/// How a scroll-into-view animates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Side effects requested by update functions
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Suppress the browser's default action for the current event
    PreventDefault,
    /// Fire a synthetic click at an element
    Click(ElementId),
    /// Move keyboard focus to an element
    Focus(ElementId),
    /// Select the contents of a text field
    Select(ElementId),
    /// Scroll an element to the top of the viewport
    ScrollIntoView {
        target: ElementId,
        behavior: ScrollBehavior,
    },
    /// Push a history entry without navigating
    PushHistory { href: String },
    /// Write text to the clipboard.
    /// The runtime answers with `CopyMsg::Completed`.
    WriteClipboard { button: ElementId, text: String },
    /// Deliver `msg` after `delay`
    Schedule { delay: Duration, msg: Box<Msg> },
    /// Write the theme preference to storage
    PersistTheme(ThemeMode),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Deliver `msg` after `delay`
    pub fn schedule(delay: Duration, msg: Msg) -> Self {
        Cmd::Schedule {
            delay,
            msg: Box::new(msg),
        }
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }

    /// Whether this command (or any in a batch) prevents the default action
    pub fn prevents_default(&self) -> bool {
        match self {
            Cmd::PreventDefault => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::prevents_default),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_nested_batches() {
        let cmd = Cmd::batch(vec![
            Cmd::PreventDefault,
            Cmd::None,
            Cmd::batch(vec![Cmd::Focus(ElementId(3)), Cmd::Click(ElementId(3))]),
        ]);
        assert_eq!(
            cmd.flatten(),
            vec![
                Cmd::PreventDefault,
                Cmd::Focus(ElementId(3)),
                Cmd::Click(ElementId(3))
            ]
        );
    }

    #[test]
    fn test_prevents_default() {
        assert!(Cmd::batch(vec![Cmd::Focus(ElementId(1)), Cmd::PreventDefault]).prevents_default());
        assert!(!Cmd::Focus(ElementId(1)).prevents_default());
    }
}
