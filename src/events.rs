//! Page events and listener registration
//!
//! Handlers are closures registered against an element (or the document)
//! for one event type. Dispatch walks from the event target up through its
//! ancestors to the document, collecting the message each matching handler
//! produces. Handlers never touch the page; all mutation happens in
//! [`crate::update`].

use std::fmt;

use crate::dom::{ElementId, Page};
use crate::messages::Msg;

/// Modifier keys held during a key event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000); // Cmd on macOS, Win on Windows

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0001 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0010 != 0
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0100 != 0
    }

    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & 0b1000 != 0
    }

    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

/// Logical key of a keyboard event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character key, as typed
    Char(char),
    Enter,
    Escape,
    Space,
    Tab,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        let key = match key {
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            " " | "Spacebar" => Key::Space,
            "Tab" => Key::Tab,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "Home" => Key::Home,
            "End" => Key::End,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Key::Char(ch),
                    _ => return None,
                }
            }
        };
        Some(key)
    }
}

/// A key press with its modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub const fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }
}

/// Event types handlers can listen for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    KeyDown,
    Input,
}

/// Event payload
#[derive(Clone, Debug, PartialEq)]
pub enum EventKind {
    Click,
    KeyDown(KeyEvent),
    /// Text field value after the edit
    Input(String),
}

impl EventKind {
    pub fn event_type(&self) -> EventType {
        match self {
            EventKind::Click => EventType::Click,
            EventKind::KeyDown(_) => EventType::KeyDown,
            EventKind::Input(_) => EventType::Input,
        }
    }
}

/// An event fired at an element
#[derive(Clone, Debug, PartialEq)]
pub struct DomEvent {
    pub target: ElementId,
    pub kind: EventKind,
}

impl DomEvent {
    pub fn click(target: ElementId) -> Self {
        Self {
            target,
            kind: EventKind::Click,
        }
    }

    pub fn key_down(target: ElementId, key: KeyEvent) -> Self {
        Self {
            target,
            kind: EventKind::KeyDown(key),
        }
    }

    pub fn input(target: ElementId, value: &str) -> Self {
        Self {
            target,
            kind: EventKind::Input(value.to_string()),
        }
    }

    pub fn key(&self) -> Option<KeyEvent> {
        match self.kind {
            EventKind::KeyDown(key) => Some(key),
            _ => None,
        }
    }
}

/// Where a handler is attached
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventTarget {
    Document,
    Element(ElementId),
}

type Handler = Box<dyn Fn(&DomEvent) -> Option<Msg>>;

struct Listener {
    target: EventTarget,
    event_type: EventType,
    handler: Handler,
}

/// Registered event handlers for one page
#[derive(Default)]
pub struct Listeners {
    listeners: Vec<Listener>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for `event_type` on `target`
    pub fn on(
        &mut self,
        target: EventTarget,
        event_type: EventType,
        handler: impl Fn(&DomEvent) -> Option<Msg> + 'static,
    ) {
        self.listeners.push(Listener {
            target,
            event_type,
            handler: Box::new(handler),
        });
    }

    /// Register a handler on an element
    pub fn on_element(
        &mut self,
        element: ElementId,
        event_type: EventType,
        handler: impl Fn(&DomEvent) -> Option<Msg> + 'static,
    ) {
        self.on(EventTarget::Element(element), event_type, handler);
    }

    /// Register a handler on the document
    pub fn on_document(
        &mut self,
        event_type: EventType,
        handler: impl Fn(&DomEvent) -> Option<Msg> + 'static,
    ) {
        self.on(EventTarget::Document, event_type, handler);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Number of handlers registered on `target` for `event_type`
    pub fn count_for(&self, target: EventTarget, event_type: EventType) -> usize {
        self.listeners
            .iter()
            .filter(|l| l.target == target && l.event_type == event_type)
            .count()
    }

    /// Messages produced by the handlers an event reaches, in bubbling order
    pub fn dispatch(&self, page: &Page, event: &DomEvent) -> Vec<Msg> {
        let event_type = event.kind.event_type();
        let path = page
            .ancestors_inclusive(event.target)
            .into_iter()
            .map(EventTarget::Element)
            .chain(std::iter::once(EventTarget::Document));

        let mut messages = Vec::new();
        for target in path {
            for listener in &self.listeners {
                if listener.target == target && listener.event_type == event_type {
                    if let Some(msg) = (listener.handler)(event) {
                        messages.push(msg);
                    }
                }
            }
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{MenuMsg, Msg};

    #[test]
    fn test_key_from_dom_key() {
        assert_eq!(Key::from_dom_key("Escape"), Some(Key::Escape));
        assert_eq!(Key::from_dom_key(" "), Some(Key::Space));
        assert_eq!(Key::from_dom_key("k"), Some(Key::Char('k')));
        assert_eq!(Key::from_dom_key("F13"), None);
    }

    #[test]
    fn test_modifiers() {
        let mods = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(mods.ctrl());
        assert!(mods.shift());
        assert!(!mods.meta());
        assert!(!mods.alt());
    }

    #[test]
    fn test_dispatch_bubbles_to_ancestors_and_document() {
        let mut page = Page::new();
        let button = page.append_element(page.root(), "button");
        let icon = page.append_element(button, "svg");

        let mut listeners = Listeners::new();
        listeners.on_element(button, EventType::Click, |_| {
            Some(Msg::Menu(MenuMsg::ToggleClicked))
        });
        listeners.on_document(EventType::Click, |_| {
            Some(Msg::Menu(MenuMsg::OverlayClicked))
        });
        listeners.on_element(button, EventType::KeyDown, |_| {
            Some(Msg::Menu(MenuMsg::ToggleClicked))
        });

        let messages = listeners.dispatch(&page, &DomEvent::click(icon));
        assert_eq!(
            messages,
            vec![
                Msg::Menu(MenuMsg::ToggleClicked),
                Msg::Menu(MenuMsg::OverlayClicked)
            ]
        );
    }

    #[test]
    fn test_handler_may_decline() {
        let mut page = Page::new();
        let input = page.append_element(page.root(), "input");
        let mut listeners = Listeners::new();
        listeners.on_document(EventType::KeyDown, |event| {
            event
                .key()
                .filter(|key| key.key == Key::Escape)
                .map(|_| Msg::Menu(MenuMsg::EscapePressed))
        });

        let ignored = DomEvent::key_down(input, KeyEvent::plain(Key::Enter));
        assert!(listeners.dispatch(&page, &ignored).is_empty());

        let escape = DomEvent::key_down(input, KeyEvent::plain(Key::Escape));
        assert_eq!(
            listeners.dispatch(&page, &escape),
            vec![Msg::Menu(MenuMsg::EscapePressed)]
        );
    }
}
