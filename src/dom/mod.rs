//! Page model
//!
//! An arena-backed element tree standing in for the browser DOM. Elements
//! carry a tag, classes, attributes, inline style and child nodes. Children
//! are elements, escaped text, or trusted markup produced by the highlighter.
//!
//! Elements are never freed: replacing children detaches them, but their
//! `ElementId` stays valid.

mod query;
mod serialize;

pub use serialize::VOID_ELEMENTS;

use crate::util::text::markup_to_text;

/// Index of an element within its [`Page`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

/// A child of an element
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(ElementId),
    /// Plain text, escaped on output
    Text(String),
    /// Markup emitted verbatim
    Markup(String),
}

/// A single element
#[derive(Debug, Clone, Default)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    style: Vec<(String, String)>,
    children: Vec<Node>,
    parent: Option<ElementId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// Lowercase tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id").filter(|id| !id.is_empty())
    }

    /// Inline style property, if set
    pub fn style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(key, _)| key == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn styles(&self) -> &[(String, String)] {
        &self.style
    }

    /// `display: none` set inline
    pub fn is_hidden(&self) -> bool {
        self.style("display") == Some("none")
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }
}

/// The element tree of one page
#[derive(Debug, Clone)]
pub struct Page {
    elements: Vec<Element>,
    root: ElementId,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// Create a page holding only an `<html>` root
    pub fn new() -> Self {
        Self {
            elements: vec![Element::new("html")],
            root: ElementId(0),
        }
    }

    /// The `<html>` element
    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }

    /// Number of elements ever created, attached or not
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    // ------------------------------------------------------------------
    // Tree construction
    // ------------------------------------------------------------------

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        self.elements.push(Element::new(tag));
        ElementId(self.elements.len() - 1)
    }

    /// Append `child` to `parent`, moving it if it was already attached
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        self.detach(child);
        self.element_mut(child).parent = Some(parent);
        self.element_mut(parent).children.push(Node::Element(child));
    }

    /// Create an element and append it to `parent`
    pub fn append_element(&mut self, parent: ElementId, tag: &str) -> ElementId {
        let child = self.create_element(tag);
        self.append_child(parent, child);
        child
    }

    /// Create an element with space-separated classes and append it
    pub fn append_with_class(&mut self, parent: ElementId, tag: &str, classes: &str) -> ElementId {
        let child = self.append_element(parent, tag);
        for class in classes.split_whitespace() {
            self.add_class(child, class);
        }
        child
    }

    pub fn append_text(&mut self, parent: ElementId, text: &str) {
        match self.element_mut(parent).children.last_mut() {
            Some(Node::Text(existing)) => existing.push_str(text),
            _ => self
                .element_mut(parent)
                .children
                .push(Node::Text(text.to_string())),
        }
    }

    pub fn append_markup(&mut self, parent: ElementId, markup: &str) {
        self.element_mut(parent)
            .children
            .push(Node::Markup(markup.to_string()));
    }

    /// Remove `child` from its parent's child list
    pub fn detach(&mut self, child: ElementId) {
        let Some(parent) = self.element_mut(child).parent.take() else {
            return;
        };
        self.element_mut(parent)
            .children
            .retain(|node| *node != Node::Element(child));
    }

    fn clear_children(&mut self, id: ElementId) {
        let children = std::mem::take(&mut self.element_mut(id).children);
        for node in children {
            if let Node::Element(child) = node {
                self.element_mut(child).parent = None;
            }
        }
    }

    /// Replace all children with a single text node
    pub fn set_text(&mut self, id: ElementId, text: &str) {
        self.clear_children(id);
        if !text.is_empty() {
            self.element_mut(id)
                .children
                .push(Node::Text(text.to_string()));
        }
    }

    /// Replace all children with trusted markup
    pub fn set_inner_html(&mut self, id: ElementId, markup: &str) {
        self.clear_children(id);
        if !markup.is_empty() {
            self.append_markup(id, markup);
        }
    }

    /// Serialized children of an element
    pub fn inner_html(&self, id: ElementId) -> String {
        serialize::inner_html(self, id)
    }

    /// Serialized element including its own tag
    pub fn outer_html(&self, id: ElementId) -> String {
        serialize::outer_html(self, id)
    }

    /// Full document with doctype
    pub fn to_html(&self) -> String {
        serialize::document_html(self)
    }

    /// Concatenated text of all descendants, markup reduced to its text
    pub fn text_content(&self, id: ElementId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: ElementId, out: &mut String) {
        for node in &self.element(id).children {
            match node {
                Node::Element(child) => self.collect_text(*child, out),
                Node::Text(text) => out.push_str(text),
                Node::Markup(markup) => out.push_str(&markup_to_text(markup)),
            }
        }
    }

    /// Element children, in order
    pub fn child_elements(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        self.element(id).children.iter().filter_map(|node| match node {
            Node::Element(child) => Some(*child),
            _ => None,
        })
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.element(id).parent
    }

    // ------------------------------------------------------------------
    // Classes
    // ------------------------------------------------------------------

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.element(id).has_class(class)
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if !self.has_class(id, class) {
            self.element_mut(id).classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        self.element_mut(id).classes.retain(|c| c != class);
    }

    /// Toggle a class, returning whether it is now present
    pub fn toggle_class(&mut self, id: ElementId, class: &str) -> bool {
        if self.has_class(id, class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class);
            true
        }
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.element(id).attribute(name)
    }

    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        if name == "class" {
            let element = self.element_mut(id);
            element.classes = value.split_whitespace().map(str::to_string).collect();
            return;
        }

        let attributes = &mut self.element_mut(id).attributes;
        match attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => attributes.push((name.to_string(), value.to_string())),
        }
    }

    pub fn remove_attribute(&mut self, id: ElementId, name: &str) {
        self.element_mut(id).attributes.retain(|(key, _)| key != name);
    }

    /// Non-empty `id` attribute
    pub fn id_of(&self, id: ElementId) -> Option<&str> {
        self.element(id).id()
    }

    // ------------------------------------------------------------------
    // Inline style
    // ------------------------------------------------------------------

    pub fn style(&self, id: ElementId, property: &str) -> Option<&str> {
        self.element(id).style(property)
    }

    /// Set an inline style property; an empty value clears it
    pub fn set_style(&mut self, id: ElementId, property: &str, value: &str) {
        let style = &mut self.element_mut(id).style;
        if value.is_empty() {
            style.retain(|(key, _)| key != property);
            return;
        }
        match style.iter_mut().find(|(key, _)| key == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => style.push((property.to_string(), value.to_string())),
        }
    }

    pub fn is_hidden(&self, id: ElementId) -> bool {
        self.element(id).is_hidden()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_class() {
        let mut page = Page::new();
        let div = page.append_element(page.root(), "div");

        assert!(page.toggle_class(div, "open"));
        assert!(page.has_class(div, "open"));
        assert!(!page.toggle_class(div, "open"));
        assert!(!page.has_class(div, "open"));
    }

    #[test]
    fn test_add_class_is_idempotent() {
        let mut page = Page::new();
        let div = page.append_element(page.root(), "div");
        page.add_class(div, "active");
        page.add_class(div, "active");
        assert_eq!(page.element(div).classes(), ["active".to_string()]);
    }

    #[test]
    fn test_set_attribute_replaces_value() {
        let mut page = Page::new();
        let btn = page.append_element(page.root(), "button");
        page.set_attribute(btn, "aria-expanded", "false");
        page.set_attribute(btn, "aria-expanded", "true");
        assert_eq!(page.attribute(btn, "aria-expanded"), Some("true"));
        assert_eq!(page.element(btn).attributes().len(), 1);
    }

    #[test]
    fn test_set_style_empty_clears() {
        let mut page = Page::new();
        let link = page.append_element(page.root(), "a");
        page.set_style(link, "display", "none");
        assert!(page.is_hidden(link));
        page.set_style(link, "display", "");
        assert!(!page.is_hidden(link));
        assert_eq!(page.style(link, "display"), None);
    }

    #[test]
    fn test_text_content_reads_through_markup() {
        let mut page = Page::new();
        let pre = page.append_element(page.root(), "pre");
        page.set_inner_html(pre, r#"<span class="keyword">SELECT</span> 1 &lt; 2"#);
        assert_eq!(page.text_content(pre), "SELECT 1 < 2");
    }

    #[test]
    fn test_set_text_detaches_children() {
        let mut page = Page::new();
        let button = page.append_element(page.root(), "button");
        let icon = page.append_element(button, "svg");
        page.set_text(button, "Failed");

        assert_eq!(page.parent(icon), None);
        assert_eq!(page.text_content(button), "Failed");
        assert_eq!(page.child_elements(button).count(), 0);
    }

    #[test]
    fn test_append_child_moves_element() {
        let mut page = Page::new();
        let a = page.append_element(page.root(), "div");
        let b = page.append_element(page.root(), "div");
        let child = page.append_element(a, "span");

        page.append_child(b, child);

        assert_eq!(page.child_elements(a).count(), 0);
        assert_eq!(page.child_elements(b).collect::<Vec<_>>(), vec![child]);
        assert_eq!(page.parent(child), Some(b));
    }
}
