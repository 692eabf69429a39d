use smallvec::SmallVec;
use smartstring::{LazyCompact, SmartString};

use crate::event::Listener;

/// Unique identifier for a document node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

/// Document node: an element or a text leaf
pub enum Node {
    Element(ElementNode),
    Text(TextNode),
}

pub struct ElementNode {
    pub tag: SmartString<LazyCompact>,
    /// Generic attributes in insertion order
    pub attributes: Vec<(SmartString<LazyCompact>, String)>,
    /// Live value property; tracks user edits on input-like elements
    pub value: Option<String>,
    /// Live checked property on checkbox inputs
    pub checked: Option<bool>,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
    pub listeners: SmallVec<[Listener; 2]>,
}

pub struct TextNode {
    pub text: String,
    pub parent: Option<NodeId>,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        match self {
            Node::Element(el) => el.parent,
            Node::Text(t) => t.parent,
        }
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        match self {
            Node::Element(el) => el.parent = parent,
            Node::Text(t) => t.parent = parent,
        }
    }
}

/// A single child entry handed to the element builder
#[derive(Debug, Clone)]
pub enum Child {
    Text(String),
    Node(NodeId),
}

/// Children argument of the element builder: nothing, one string, one
/// already-built node, or an ordered mix of both.
#[derive(Debug, Clone, Default)]
pub enum Children {
    #[default]
    None,
    Text(String),
    Node(NodeId),
    List(Vec<Child>),
}

impl Children {
    pub(crate) fn into_entries(self) -> Vec<Child> {
        match self {
            Children::None => Vec::new(),
            Children::Text(text) => vec![Child::Text(text)],
            Children::Node(id) => vec![Child::Node(id)],
            Children::List(entries) => entries,
        }
    }
}

impl From<&str> for Children {
    fn from(text: &str) -> Self {
        Children::Text(text.to_string())
    }
}

impl From<String> for Children {
    fn from(text: String) -> Self {
        Children::Text(text)
    }
}

impl From<NodeId> for Children {
    fn from(id: NodeId) -> Self {
        Children::Node(id)
    }
}

impl From<Vec<Child>> for Children {
    fn from(entries: Vec<Child>) -> Self {
        Children::List(entries)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<NodeId> for Child {
    fn from(id: NodeId) -> Self {
        Child::Node(id)
    }
}
