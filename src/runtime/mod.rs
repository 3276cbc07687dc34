//! Runtime module - drives a page model
//!
//! - `platform` - clipboard, scroll and focus capabilities
//!
//! The runtime owns the model, the registered listeners, a [`Platform`]
//! and a [`Storage`]. Events are dispatched to listeners, the resulting
//! messages go through [`update`], and the commands they return are
//! executed here. Timers run on a virtual clock advanced by the host.

pub mod platform;

pub use platform::{HeadlessPlatform, Platform, PlatformCall, SystemPlatform};

use std::time::Duration;

use crate::commands::Cmd;
use crate::config::SiteConfig;
use crate::dom::Page;
use crate::events::{DomEvent, Listeners};
use crate::init::init_page;
use crate::messages::{CopyMsg, Msg};
use crate::model::PageModel;
use crate::storage::Storage;
use crate::syntax::{builtin_highlighter, Highlighter};
use crate::theme::save_preference;
use crate::update::update;

/// What happened while handling one event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// A handler suppressed the default action
    pub default_prevented: bool,
    /// Messages produced by listeners
    pub messages: usize,
}

#[derive(Debug)]
struct Timer {
    due: Duration,
    seq: u64,
    msg: Msg,
}

/// A loaded page and everything needed to react to its events
#[derive(Debug)]
pub struct Runtime<P: Platform, S: Storage> {
    model: PageModel,
    listeners: Listeners,
    platform: P,
    storage: S,
    now: Duration,
    timers: Vec<Timer>,
    next_seq: u64,
}

impl<P: Platform, S: Storage> Runtime<P, S> {
    /// Load a page with the built-in highlighter
    pub fn load(page: Page, config: SiteConfig, location: &str, platform: P, storage: S) -> Self {
        Self::load_with(page, config, location, platform, storage, builtin_highlighter())
    }

    /// Load a page, running every page-load initializer
    pub fn load_with(
        page: Page,
        config: SiteConfig,
        location: &str,
        platform: P,
        storage: S,
        highlighter: &Highlighter,
    ) -> Self {
        let mut model = PageModel::new(page, config, location);
        let mut listeners = Listeners::new();
        init_page(&mut model, &mut listeners, highlighter, &storage);

        Self {
            model,
            listeners,
            platform,
            storage,
            now: Duration::ZERO,
            timers: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn model(&self) -> &PageModel {
        &self.model
    }

    pub fn page(&self) -> &Page {
        &self.model.page
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Virtual time elapsed since load
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Timers scheduled but not yet fired
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Consume the runtime, returning the final model
    pub fn into_model(self) -> PageModel {
        self.model
    }

    /// Dispatch a DOM event to its listeners
    pub fn dispatch(&mut self, event: DomEvent) -> EventOutcome {
        let messages = self.listeners.dispatch(&self.model.page, &event);
        let mut outcome = EventOutcome {
            default_prevented: false,
            messages: messages.len(),
        };
        for msg in messages {
            self.handle(msg, &mut outcome);
        }
        outcome
    }

    /// Deliver a message directly, as a host callback would
    pub fn send(&mut self, msg: Msg) -> EventOutcome {
        let mut outcome = EventOutcome {
            default_prevented: false,
            messages: 1,
        };
        self.handle(msg, &mut outcome);
        outcome
    }

    /// Move the virtual clock forward, firing due timers in order.
    ///
    /// Timers scheduled while firing run too if they fall due within the
    /// window. Returns the number of timers fired.
    pub fn advance(&mut self, by: Duration) -> usize {
        let until = self.now + by;
        let mut fired = 0;

        while let Some(index) = self.next_due(until) {
            let timer = self.timers.remove(index);
            self.now = timer.due;
            self.send(timer.msg);
            fired += 1;
        }

        self.now = until;
        fired
    }

    fn next_due(&self, until: Duration) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= until)
            .min_by_key(|(_, timer)| (timer.due, timer.seq))
            .map(|(index, _)| index)
    }

    fn handle(&mut self, msg: Msg, outcome: &mut EventOutcome) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd, outcome);
        }
    }

    fn process_cmd(&mut self, cmd: Cmd, outcome: &mut EventOutcome) {
        match cmd {
            Cmd::None => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd, outcome);
                }
            }
            Cmd::PreventDefault => outcome.default_prevented = true,
            Cmd::Click(target) => {
                // Synthetic clicks have their own default action
                self.dispatch(DomEvent::click(target));
            }
            Cmd::Focus(target) => self.platform.focus(target),
            Cmd::Select(target) => self.platform.select(target),
            Cmd::ScrollIntoView { target, behavior } => {
                self.platform.scroll_into_view(target, behavior)
            }
            Cmd::PushHistory { href } => self.platform.push_history(&href),
            Cmd::WriteClipboard { button, text } => {
                let result = self.platform.write_clipboard(&text);
                self.handle(Msg::Copy(CopyMsg::Completed { button, result }), outcome);
            }
            Cmd::Schedule { delay, msg } => {
                self.next_seq += 1;
                self.timers.push(Timer {
                    due: self.now + delay,
                    seq: self.next_seq,
                    msg: *msg,
                });
            }
            Cmd::PersistTheme(mode) => {
                if let Err(err) = save_preference(&mut self.storage, mode) {
                    tracing::warn!("Failed to save theme preference: {}", err);
                }
            }
        }
    }
}
