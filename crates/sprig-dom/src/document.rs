use tracing::trace;

use crate::arena::NodeArena;
use crate::attrs::{AttrValue, Attrs};
use crate::event::{EventHandler, Listeners};
use crate::node::{Child, Children, ElementNode, Node, NodeId, TextNode};

const NO_CHILDREN: &[NodeId] = &[];

/// An in-memory document tree: node storage plus the element builder and the
/// tree operations components rely on.
pub struct Document {
    arena: NodeArena,
}

impl Document {
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.get(id).is_some()
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.arena.create(Node::Text(TextNode {
            text: text.into(),
            parent: None,
        }))
    }

    /// Construct an element from a tag name, attribute mapping, children and
    /// event listeners.
    ///
    /// Two attribute keys are special-cased: a text `value` on input-like
    /// elements sets the live value property, and a boolean `checked` on an
    /// input typed `checkbox` sets the live checked property. Everything else
    /// lands in the generic attribute list. Children referring to ids absent
    /// from the document are silently skipped.
    pub fn build(
        &mut self,
        tag: &str,
        attrs: Attrs,
        children: Children,
        listeners: Listeners,
    ) -> NodeId {
        let input_like = matches!(tag, "input" | "textarea");
        let is_checkbox = tag == "input"
            && matches!(attrs.get("type"), Some(AttrValue::Text(t)) if t == "checkbox");

        let mut element = ElementNode {
            tag: tag.into(),
            attributes: Vec::new(),
            value: None,
            checked: None,
            children: Vec::new(),
            parent: None,
            listeners: listeners.0,
        };

        for (name, value) in attrs.0 {
            match value {
                AttrValue::Text(v) if input_like && name.as_str() == "value" => {
                    element.value = Some(v);
                }
                AttrValue::Bool(b) if is_checkbox && name.as_str() == "checked" => {
                    element.checked = Some(b);
                }
                value => element.attributes.push((name, value.into_attr_string())),
            }
        }

        let id = self.arena.create(Node::Element(element));

        for child in children.into_entries() {
            match child {
                Child::Text(text) => {
                    let text_id = self.create_text(text);
                    self.append_child(id, text_id);
                }
                Child::Node(child_id) => {
                    if self.contains(child_id) {
                        self.append_child(id, child_id);
                    }
                }
            }
        }

        id
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first. No-op if either id is missing or `parent` is
    /// not an element.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || !self.contains(child) {
            return;
        }
        if !matches!(self.arena.get(parent), Some(Node::Element(_))) {
            return;
        }
        self.detach(child);
        if let Some(Node::Element(el)) = self.arena.get_mut(parent) {
            el.children.push(child);
        }
        if let Some(node) = self.arena.get_mut(child) {
            node.set_parent(Some(parent));
        }
    }

    /// Remove a node from its parent's child list without dropping it
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        if let Some(Node::Element(el)) = self.arena.get_mut(parent) {
            el.children.retain(|&c| c != id);
        }
        if let Some(node) = self.arena.get_mut(id) {
            node.set_parent(None);
        }
    }

    /// Swap `new` into `old`'s position under the same parent and drop the
    /// old subtree. A detached `old` is dropped without a swap; returns
    /// whether a swap happened.
    pub fn replace(&mut self, old: NodeId, new: NodeId) -> bool {
        if old == new || !self.contains(new) {
            return false;
        }
        let Some(parent) = self.parent(old) else {
            self.remove_subtree(old);
            return false;
        };

        self.detach(new);
        if let Some(Node::Element(el)) = self.arena.get_mut(parent) {
            if let Some(slot) = el.children.iter_mut().find(|c| **c == old) {
                *slot = new;
            }
        }
        if let Some(node) = self.arena.get_mut(new) {
            node.set_parent(Some(parent));
        }
        if let Some(node) = self.arena.get_mut(old) {
            node.set_parent(None);
        }
        self.remove_subtree(old);

        trace!(?old, ?new, ?parent, "replaced node in place");
        true
    }

    /// Drop a node and its whole subtree from the document
    pub fn remove_subtree(&mut self, id: NodeId) {
        self.detach(id);
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(Node::Element(el)) = self.arena.remove(next) {
                stack.extend(el.children);
            }
        }
    }

    /// Set the live value property. Only input-like elements carry one;
    /// anything else is a no-op.
    pub fn set_value(&mut self, id: NodeId, value: impl Into<String>) {
        if let Some(Node::Element(el)) = self.arena.get_mut(id) {
            if matches!(el.tag.as_str(), "input" | "textarea") {
                el.value = Some(value.into());
            }
        }
    }

    pub fn value(&self, id: NodeId) -> Option<&str> {
        match self.arena.get(id)? {
            Node::Element(el) => el.value.as_deref(),
            Node::Text(_) => None,
        }
    }

    /// Set the live checked property on an input; no-op elsewhere
    pub fn set_checked(&mut self, id: NodeId, checked: bool) {
        if let Some(Node::Element(el)) = self.arena.get_mut(id) {
            if el.tag.as_str() == "input" {
                el.checked = Some(checked);
            }
        }
    }

    pub fn checked(&self, id: NodeId) -> Option<bool> {
        match self.arena.get(id)? {
            Node::Element(el) => el.checked,
            Node::Text(_) => None,
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.arena.get(id)? {
            Node::Element(el) => Some(el.tag.as_str()),
            Node::Text(_) => None,
        }
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.arena.get(id)? {
            Node::Text(t) => Some(&t.text),
            Node::Element(_) => None,
        }
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match self.arena.get(id)? {
            Node::Element(el) => el
                .attributes
                .iter()
                .find(|(n, _)| n.as_str() == name)
                .map(|(_, value)| value.as_str()),
            Node::Text(_) => None,
        }
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.arena.get(id) {
            Some(Node::Element(el)) => &el.children,
            _ => NO_CHILDREN,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id)?.parent()
    }

    /// Handlers registered on `id` for the given event name, cloned out so
    /// callers can invoke them without holding a document borrow
    pub fn handlers_for(&self, id: NodeId, event_name: &str) -> Vec<EventHandler> {
        match self.arena.get(id) {
            Some(Node::Element(el)) => el
                .listeners
                .iter()
                .filter(|l| l.event.as_str() == event_name)
                .map(|l| l.handler.clone())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// All elements with the given tag under `root`, depth-first, including
    /// `root` itself
    pub fn find_all(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.collect_by_tag(root, tag, &mut found);
        found
    }

    pub fn find(&self, root: NodeId, tag: &str) -> Option<NodeId> {
        self.find_all(root, tag).into_iter().next()
    }

    fn collect_by_tag(&self, id: NodeId, tag: &str, found: &mut Vec<NodeId>) {
        if self.tag(id) == Some(tag) {
            found.push(id);
        }
        for &child in self.children(id) {
            self.collect_by_tag(child, tag, found);
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
