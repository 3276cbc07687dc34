//! Host capabilities the runtime drives
//!
//! Commands that reach outside the page (clipboard, scrolling, history,
//! focus) go through a [`Platform`].

use crate::commands::ScrollBehavior;
use crate::dom::ElementId;

/// Side-effect sink for commands that leave the page
pub trait Platform {
    fn write_clipboard(&mut self, text: &str) -> Result<(), String>;
    fn scroll_into_view(&mut self, target: ElementId, behavior: ScrollBehavior);
    fn push_history(&mut self, href: &str);
    fn focus(&mut self, target: ElementId);
    fn select(&mut self, target: ElementId);
}

/// A platform call, as recorded by [`HeadlessPlatform`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    WriteClipboard(String),
    ScrollIntoView(ElementId, ScrollBehavior),
    PushHistory(String),
    Focus(ElementId),
    Select(ElementId),
}

/// Platform without a display: records every call and keeps the
/// clipboard in memory
#[derive(Debug, Clone, Default)]
pub struct HeadlessPlatform {
    pub calls: Vec<PlatformCall>,
    pub clipboard: Option<String>,
    clipboard_error: Option<String>,
}

impl HeadlessPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every clipboard write fail with `error`
    pub fn with_clipboard_error(error: &str) -> Self {
        Self {
            clipboard_error: Some(error.to_string()),
            ..Self::default()
        }
    }

    /// Element most recently focused
    pub fn focused(&self) -> Option<ElementId> {
        self.calls.iter().rev().find_map(|call| match call {
            PlatformCall::Focus(target) => Some(*target),
            _ => None,
        })
    }

    /// History entries pushed so far
    pub fn history(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                PlatformCall::PushHistory(href) => Some(href.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Platform for HeadlessPlatform {
    fn write_clipboard(&mut self, text: &str) -> Result<(), String> {
        self.calls.push(PlatformCall::WriteClipboard(text.to_string()));
        if let Some(err) = &self.clipboard_error {
            return Err(err.clone());
        }
        self.clipboard = Some(text.to_string());
        Ok(())
    }

    fn scroll_into_view(&mut self, target: ElementId, behavior: ScrollBehavior) {
        self.calls.push(PlatformCall::ScrollIntoView(target, behavior));
    }

    fn push_history(&mut self, href: &str) {
        self.calls.push(PlatformCall::PushHistory(href.to_string()));
    }

    fn focus(&mut self, target: ElementId) {
        self.calls.push(PlatformCall::Focus(target));
    }

    fn select(&mut self, target: ElementId) {
        self.calls.push(PlatformCall::Select(target));
    }
}

/// Platform backed by the system clipboard (arboard).
///
/// Scrolling, history and focus have no terminal equivalent and are logged.
#[derive(Default)]
pub struct SystemPlatform {
    clipboard: Option<arboard::Clipboard>,
    handover: bool,
}

impl SystemPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform for a process that exits right after copying.
    ///
    /// On X11 and Wayland the clipboard is served by the process that set
    /// it, so writes block until another client (usually a clipboard
    /// manager or a paste) takes ownership of the contents.
    pub fn with_handover() -> Self {
        Self {
            handover: true,
            ..Self::default()
        }
    }

    /// Whether clipboard writes wait for another owner
    pub fn waits_for_handover(&self) -> bool {
        self.handover && cfg!(target_os = "linux")
    }

    fn clipboard(&mut self) -> Result<&mut arboard::Clipboard, String> {
        if self.clipboard.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| "clipboard unavailable".to_string())
    }
}

impl std::fmt::Debug for SystemPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemPlatform")
            .field("clipboard_open", &self.clipboard.is_some())
            .field("handover", &self.handover)
            .finish()
    }
}

impl Platform for SystemPlatform {
    fn write_clipboard(&mut self, text: &str) -> Result<(), String> {
        let wait = self.waits_for_handover();
        let clipboard = self.clipboard()?;

        #[cfg(target_os = "linux")]
        if wait {
            use arboard::SetExtLinux;

            tracing::debug!("Waiting for another client to take the clipboard");
            return clipboard
                .set()
                .wait()
                .text(text.to_string())
                .map_err(|e| e.to_string());
        }
        #[cfg(not(target_os = "linux"))]
        let _ = wait;

        clipboard.set_text(text.to_string()).map_err(|e| e.to_string())
    }

    fn scroll_into_view(&mut self, target: ElementId, behavior: ScrollBehavior) {
        tracing::debug!("scroll_into_view {:?} ({:?})", target, behavior);
    }

    fn push_history(&mut self, href: &str) {
        tracing::debug!("push_history {}", href);
    }

    fn focus(&mut self, target: ElementId) {
        tracing::debug!("focus {:?}", target);
    }

    fn select(&mut self, target: ElementId) {
        tracing::debug!("select {:?}", target);
    }
}
