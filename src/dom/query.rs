//! Document-order queries over the page tree

use super::{Element, ElementId, Page};

impl Page {
    /// All descendants of `scope` in document order, excluding `scope`
    pub fn descendants(&self, scope: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = self.child_elements(scope).collect();
        stack.reverse();

        while let Some(id) = stack.pop() {
            out.push(id);
            let first = stack.len();
            stack.extend(self.child_elements(id));
            stack[first..].reverse();
        }

        out
    }

    /// Descendants of `scope` matching `predicate`
    pub fn find_all(&self, scope: ElementId, predicate: impl Fn(&Element) -> bool) -> Vec<ElementId> {
        self.descendants(scope)
            .into_iter()
            .filter(|id| predicate(self.element(*id)))
            .collect()
    }

    /// First descendant of `scope` matching `predicate`
    pub fn find_first(
        &self,
        scope: ElementId,
        predicate: impl Fn(&Element) -> bool,
    ) -> Option<ElementId> {
        self.descendants(scope)
            .into_iter()
            .find(|id| predicate(self.element(*id)))
    }

    pub fn find_all_by_class(&self, scope: ElementId, class: &str) -> Vec<ElementId> {
        self.find_all(scope, |el| el.has_class(class))
    }

    pub fn find_by_class(&self, scope: ElementId, class: &str) -> Option<ElementId> {
        self.find_first(scope, |el| el.has_class(class))
    }

    /// Descendants whose tag is any of `tags`
    pub fn find_all_by_tag(&self, scope: ElementId, tags: &[&str]) -> Vec<ElementId> {
        self.find_all(scope, |el| tags.iter().any(|tag| el.is(tag)))
    }

    /// Attached element with the given `id` attribute
    pub fn find_by_id(&self, id: &str) -> Option<ElementId> {
        if id.is_empty() {
            return None;
        }
        if self.id_of(self.root()) == Some(id) {
            return Some(self.root());
        }
        self.find_first(self.root(), |el| el.id() == Some(id))
    }

    /// `id` followed by its ancestors, nearest first
    pub fn ancestors_inclusive(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = vec![id];
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            out.push(parent);
            current = parent;
        }
        out
    }

    /// Nearest element (starting with `id` itself) carrying `class`
    pub fn closest_by_class(&self, id: ElementId, class: &str) -> Option<ElementId> {
        self.ancestors_inclusive(id)
            .into_iter()
            .find(|ancestor| self.has_class(*ancestor, class))
    }

    /// Whether `id` sits inside the tree rooted at the page root
    pub fn is_connected(&self, id: ElementId) -> bool {
        self.ancestors_inclusive(id).last() == Some(&self.root())
    }

    /// The element holding a code block's source.
    ///
    /// First descendant, in document order, that is a `pre` or a `code`
    /// inside a `pre`. For the usual `<pre><code>` nesting this is the `pre`.
    pub fn code_element(&self, block: ElementId) -> Option<ElementId> {
        self.descendants(block).into_iter().find(|id| {
            let el = self.element(*id);
            el.is("pre")
                || (el.is("code")
                    && self
                        .ancestors_inclusive(*id)
                        .into_iter()
                        .skip(1)
                        .take_while(|ancestor| *ancestor != block)
                        .any(|ancestor| self.element(ancestor).is("pre")))
        })
    }
}
