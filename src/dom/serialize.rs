//! HTML serialization of the page tree

use super::{ElementId, Node, Page};
use crate::util::text::{escape_attribute, escape_html};

/// Elements written without a closing tag
pub const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

pub(super) fn document_html(page: &Page) -> String {
    let mut out = String::from("<!DOCTYPE html>\n");
    write_element(page, page.root(), &mut out);
    out.push('\n');
    out
}

pub(super) fn outer_html(page: &Page, id: ElementId) -> String {
    let mut out = String::new();
    write_element(page, id, &mut out);
    out
}

pub(super) fn inner_html(page: &Page, id: ElementId) -> String {
    let mut out = String::new();
    write_children(page, id, &mut out);
    out
}

fn write_element(page: &Page, id: ElementId, out: &mut String) {
    let element = page.element(id);

    out.push('<');
    out.push_str(element.tag());

    if !element.classes().is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape_attribute(&element.classes().join(" ")));
        out.push('"');
    }

    for (name, value) in element.attributes() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }

    if !element.styles().is_empty() {
        let style = element
            .styles()
            .iter()
            .map(|(property, value)| format!("{}: {}", property, value))
            .collect::<Vec<_>>()
            .join("; ");
        out.push_str(" style=\"");
        out.push_str(&escape_attribute(&style));
        out.push('"');
    }

    out.push('>');

    if VOID_ELEMENTS.iter().any(|tag| *tag == element.tag()) {
        return;
    }

    write_children(page, id, out);

    out.push_str("</");
    out.push_str(element.tag());
    out.push('>');
}

fn write_children(page: &Page, id: ElementId, out: &mut String) {
    for node in page.element(id).children() {
        match node {
            Node::Element(child) => write_element(page, *child, out),
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Markup(markup) => out.push_str(markup),
        }
    }
}
