//! Sidebar filter update handlers

use crate::commands::Cmd;
use crate::dom::{ElementId, Page};
use crate::messages::{Msg, SearchMsg};
use crate::model::PageModel;
use crate::nav::NAV_LINK_CLASS;

/// Handle sidebar filter messages
pub fn update_search(model: &mut PageModel, msg: SearchMsg) -> Option<Cmd> {
    let debounce = model.config.search_debounce();
    let search = model.search.as_mut()?;

    match msg {
        SearchMsg::QueryChanged(value) => {
            model.page.set_attribute(search.input, "value", &value);

            if debounce.is_zero() {
                filter_nav(&mut model.page, &search.links, &search.sections, &value);
                return None;
            }

            search.generation += 1;
            search.pending_query = value;
            Some(Cmd::schedule(
                debounce,
                Msg::Search(SearchMsg::Apply {
                    generation: search.generation,
                }),
            ))
        }

        SearchMsg::Apply { generation } => {
            if generation != search.generation {
                tracing::debug!(
                    "Skipping stale filter: generation {} != {}",
                    generation,
                    search.generation
                );
                return None;
            }
            let query = std::mem::take(&mut search.pending_query);
            filter_nav(&mut model.page, &search.links, &search.sections, &query);
            None
        }

        SearchMsg::FocusShortcut => Some(Cmd::batch(vec![
            Cmd::PreventDefault,
            Cmd::Focus(search.input),
            Cmd::Select(search.input),
        ])),
    }
}

/// Show the links whose text contains `query` (case-insensitive) and hide
/// the rest; section titles are hidden when their section has no visible
/// link. An empty query shows everything.
///
/// Returns the number of visible links.
pub fn filter_nav(page: &mut Page, links: &[ElementId], sections: &[ElementId], query: &str) -> usize {
    let query = query.trim().to_lowercase();
    let mut visible = 0;

    for link in links {
        let text = page.text_content(*link).to_lowercase();
        if query.is_empty() || text.contains(&query) {
            page.set_style(*link, "display", "");
            visible += 1;
        } else {
            page.set_style(*link, "display", "none");
        }
    }

    for section in sections {
        let has_visible = page
            .find_all_by_class(*section, NAV_LINK_CLASS)
            .into_iter()
            .any(|link| !page.is_hidden(link));
        if let Some(title) = page.find_by_class(*section, "nav-section-title") {
            page.set_style(title, "display", if has_visible { "" } else { "none" });
        }
    }

    visible
}
