use std::cell::RefCell;
use std::rc::Rc;

use sprig_dom::{Document, Node, NodeId};

/// Target-specific renderer: receives the document once the root is mounted
/// and after every event pump.
pub trait Renderer {
    fn mount(&mut self, doc: &Document, root: NodeId);
    fn update(&mut self, doc: &Document, root: NodeId);
}

/// Debug/testing renderer that prints an indented node tree.
///
/// Doesn't render anything visually - it prints node lines to the console
/// and, when constructed with a buffer, collects them for assertions.
pub struct TreeRenderer {
    log_buffer: Option<Rc<RefCell<Vec<String>>>>,
}

impl TreeRenderer {
    pub fn new() -> Self {
        Self { log_buffer: None }
    }

    /// Create a TreeRenderer with a log buffer for testing
    pub fn with_buffer(buffer: Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            log_buffer: Some(buffer),
        }
    }

    fn log(&self, msg: &str) {
        if let Some(buffer) = &self.log_buffer {
            buffer.borrow_mut().push(msg.to_string());
        }
        println!("{}", msg);
    }

    fn print_node(&self, doc: &Document, id: NodeId, indent: usize) {
        let indent_str = "  ".repeat(indent);
        match doc.node(id) {
            None => {}
            Some(Node::Text(t)) => {
                self.log(&format!("{}\"{}\"", indent_str, t.text));
            }
            Some(Node::Element(el)) => {
                let mut line = format!("{}<{}", indent_str, el.tag);
                for (name, value) in &el.attributes {
                    line.push_str(&format!(" {}=\"{}\"", name, value));
                }
                if let Some(value) = &el.value {
                    line.push_str(&format!(" value=\"{}\"", value));
                }
                if el.checked == Some(true) {
                    line.push_str(" checked");
                }
                line.push('>');
                self.log(&line);
                for &child in &el.children {
                    self.print_node(doc, child, indent + 1);
                }
            }
        }
    }
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TreeRenderer {
    fn mount(&mut self, doc: &Document, root: NodeId) {
        self.log("=== TreeRenderer: MOUNT ===");
        self.print_node(doc, root, 0);
    }

    fn update(&mut self, doc: &Document, root: NodeId) {
        self.log("=== TreeRenderer: UPDATE ===");
        self.print_node(doc, root, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_dom::{Attrs, Children, Listeners};

    #[test]
    fn test_tree_renderer_buffer() {
        let mut doc = Document::new();
        let heading = doc.build("h1", Attrs::new(), Children::from("TODO List"), Listeners::new());
        let root = doc.build(
            "div",
            Attrs::new().set("class", "todo-list"),
            Children::from(heading),
            Listeners::new(),
        );

        let buffer = Rc::new(RefCell::new(Vec::new()));
        let mut renderer = TreeRenderer::with_buffer(buffer.clone());
        renderer.mount(&doc, root);

        let log = buffer.borrow();
        assert!(log.iter().any(|line| line.contains("<div class=\"todo-list\">")));
        assert!(log.iter().any(|line| line.contains("\"TODO List\"")));
    }
}
