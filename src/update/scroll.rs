//! Smooth scroll and scroll spy update handlers

use crate::commands::{Cmd, ScrollBehavior};
use crate::messages::{ScrollMsg, ScrollSpyMsg};
use crate::model::PageModel;

/// Handle in-page anchor clicks.
///
/// A bare `#` or a fragment with no matching element leaves the browser's
/// default navigation alone.
pub fn update_scroll(model: &mut PageModel, msg: ScrollMsg) -> Option<Cmd> {
    match msg {
        ScrollMsg::AnchorClicked { anchor } => {
            let href = model.page.attribute(anchor, "href")?;
            let fragment = href.strip_prefix('#')?;
            if fragment.is_empty() {
                return None;
            }

            let Some(target) = model.page.find_by_id(fragment) else {
                tracing::debug!("No scroll target for {}", href);
                return None;
            };

            Some(Cmd::batch(vec![
                Cmd::PreventDefault,
                Cmd::ScrollIntoView {
                    target,
                    behavior: ScrollBehavior::Smooth,
                },
                Cmd::PushHistory {
                    href: href.to_string(),
                },
            ]))
        }
    }
}

/// Mark the TOC link of each heading that entered the observer band.
///
/// Entries are applied in order, so the last intersecting heading of a
/// batch wins.
pub fn update_scroll_spy(model: &mut PageModel, msg: ScrollSpyMsg) -> Option<Cmd> {
    let spy = model.scroll_spy.as_ref()?;
    let page = &mut model.page;

    match msg {
        ScrollSpyMsg::Observed(entries) => {
            for entry in entries.iter().filter(|entry| entry.is_intersecting) {
                let Some(id) = page.id_of(entry.target).map(str::to_string) else {
                    continue;
                };
                let href = format!("#{}", id);

                for link in &spy.links {
                    page.remove_class(*link, "active");
                    if page.attribute(*link, "href") == Some(href.as_str()) {
                        page.add_class(*link, "active");
                    }
                }
            }
        }
    }

    None
}
