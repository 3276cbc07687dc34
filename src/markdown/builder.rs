//! Markdown to page tree using pulldown-cmark
//!
//! Events are folded directly into [`Page`] elements instead of an HTML
//! string, so the load-time behaviours can work on the result. Fenced code
//! becomes a `.code-block` with a header and copy button.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

use crate::dom::{ElementId, Page};
use crate::syntax::{LanguageId, CODE_BLOCK_CLASS};

/// Parser options used for documentation pages
pub fn markdown_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameKind {
    Normal,
    Image,
    TableHead,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    element: ElementId,
    kind: FrameKind,
}

/// Append the rendered markdown to `parent`.
///
/// Returns the number of code blocks created.
pub fn append_markdown(page: &mut Page, parent: ElementId, markdown: &str) -> usize {
    let mut stack = vec![Frame {
        element: parent,
        kind: FrameKind::Normal,
    }];
    let mut code_blocks = 0;

    for event in Parser::new_ext(markdown, markdown_options()) {
        let top = stack.last().copied().unwrap_or(Frame {
            element: parent,
            kind: FrameKind::Normal,
        });

        match event {
            Event::Start(tag) => {
                if matches!(tag, Tag::CodeBlock(_)) {
                    code_blocks += 1;
                }
                let in_head = stack.iter().any(|f| f.kind == FrameKind::TableHead);
                stack.push(open_tag(page, top.element, tag, in_head));
            }
            Event::End(_) => {
                // The parent frame is never popped
                if stack.len() > 1 {
                    stack.pop();
                }
            }
            Event::Text(text) => match top.kind {
                FrameKind::Image => {
                    let alt = format!("{}{}", page.attribute(top.element, "alt").unwrap_or(""), text);
                    page.set_attribute(top.element, "alt", &alt);
                }
                _ => page.append_text(top.element, &text),
            },
            Event::Code(text) => {
                let code = page.append_element(top.element, "code");
                page.append_text(code, &text);
            }
            Event::Html(html) | Event::InlineHtml(html) => page.append_markup(top.element, &html),
            Event::SoftBreak => page.append_text(top.element, "\n"),
            Event::HardBreak => {
                page.append_element(top.element, "br");
            }
            Event::Rule => {
                page.append_element(top.element, "hr");
            }
            Event::TaskListMarker(checked) => {
                let input = page.append_element(top.element, "input");
                page.set_attribute(input, "type", "checkbox");
                page.set_attribute(input, "disabled", "");
                if checked {
                    page.set_attribute(input, "checked", "");
                }
            }
            other => {
                tracing::debug!("Skipping unsupported markdown event {:?}", other);
            }
        }
    }

    code_blocks
}

fn open_tag(page: &mut Page, parent: ElementId, tag: Tag<'_>, in_table_head: bool) -> Frame {
    let normal = |element| Frame {
        element,
        kind: FrameKind::Normal,
    };

    match tag {
        Tag::Paragraph => normal(page.append_element(parent, "p")),
        Tag::Heading {
            level, id, classes, ..
        } => {
            let heading = page.append_element(parent, heading_tag(level));
            if let Some(id) = id {
                page.set_attribute(heading, "id", &id);
            }
            for class in classes {
                page.add_class(heading, &class);
            }
            normal(heading)
        }
        Tag::BlockQuote(_) => normal(page.append_element(parent, "blockquote")),
        Tag::CodeBlock(kind) => {
            let language = match kind {
                CodeBlockKind::Fenced(info) => info
                    .split_whitespace()
                    .next()
                    .unwrap_or_default()
                    .to_string(),
                CodeBlockKind::Indented => String::new(),
            };
            normal(append_code_block(page, parent, &language))
        }
        Tag::List(Some(start)) => {
            let list = page.append_element(parent, "ol");
            if start != 1 {
                page.set_attribute(list, "start", &start.to_string());
            }
            normal(list)
        }
        Tag::List(None) => normal(page.append_element(parent, "ul")),
        Tag::Item => normal(page.append_element(parent, "li")),
        Tag::Emphasis => normal(page.append_element(parent, "em")),
        Tag::Strong => normal(page.append_element(parent, "strong")),
        Tag::Strikethrough => normal(page.append_element(parent, "del")),
        Tag::Link {
            dest_url, title, ..
        } => {
            let link = page.append_element(parent, "a");
            page.set_attribute(link, "href", &dest_url);
            if !title.is_empty() {
                page.set_attribute(link, "title", &title);
            }
            normal(link)
        }
        Tag::Image {
            dest_url, title, ..
        } => {
            let image = page.append_element(parent, "img");
            page.set_attribute(image, "src", &dest_url);
            page.set_attribute(image, "alt", "");
            if !title.is_empty() {
                page.set_attribute(image, "title", &title);
            }
            Frame {
                element: image,
                kind: FrameKind::Image,
            }
        }
        Tag::Table(_) => normal(page.append_element(parent, "table")),
        Tag::TableHead => {
            let head = page.append_element(parent, "thead");
            Frame {
                element: page.append_element(head, "tr"),
                kind: FrameKind::TableHead,
            }
        }
        Tag::TableRow => normal(page.append_element(parent, "tr")),
        Tag::TableCell => {
            let cell = if in_table_head { "th" } else { "td" };
            normal(page.append_element(parent, cell))
        }
        Tag::HtmlBlock => normal(parent),
        other => {
            tracing::debug!("Rendering unsupported markdown tag {:?} as div", other);
            normal(page.append_element(parent, "div"))
        }
    }
}

fn heading_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}

/// Build `div.code-block > (div.code-header, pre > code)` and return the
/// `code` element that receives the block text.
pub fn append_code_block(page: &mut Page, parent: ElementId, language: &str) -> ElementId {
    let block = page.append_with_class(parent, "div", CODE_BLOCK_CLASS);
    let header = page.append_with_class(block, "div", "code-header");

    if !language.is_empty() {
        page.set_attribute(block, "data-language", &language.to_lowercase());
        let label = page.append_with_class(header, "span", "code-language");
        let display = LanguageId::from_name(language)
            .map(|id| id.display_name().to_string())
            .unwrap_or_else(|| language.to_string());
        page.append_text(label, &display);
    }

    let button = page.append_with_class(header, "button", "code-copy");
    page.set_attribute(button, "type", "button");
    page.set_attribute(button, "aria-label", "Copy code");
    page.append_text(button, "Copy");

    let pre = page.append_element(block, "pre");
    page.append_element(pre, "code")
}
