use crate::node::{Node, NodeId};

/// Arena-based storage for document nodes
pub struct NodeArena {
    nodes: Vec<Option<Node>>,
    free_list: Vec<u32>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Create a node, reusing a freed slot when one is available
    pub fn create(&mut self, node: Node) -> NodeId {
        if let Some(idx) = self.free_list.pop() {
            self.nodes[idx as usize] = Some(node);
            NodeId(idx)
        } else {
            let idx = self.nodes.len() as u32;
            self.nodes.push(Some(node));
            NodeId(idx)
        }
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize).and_then(|n| n.as_ref())
    }

    /// Get a mutable reference to a node
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize).and_then(|n| n.as_mut())
    }

    /// Remove a node and return it
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        if let Some(slot) = self.nodes.get_mut(id.0 as usize) {
            let node = slot.take();
            if node.is_some() {
                self.free_list.push(id.0);
            }
            node
        } else {
            None
        }
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::TextNode;

    fn text(s: &str) -> Node {
        Node::Text(TextNode {
            text: s.to_string(),
            parent: None,
        })
    }

    #[test]
    fn test_arena_create_get() {
        let mut arena = NodeArena::new();
        let id = arena.create(text("Hello"));

        assert_eq!(id, NodeId(0));
        assert!(arena.get(id).is_some());
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_arena_remove_reuse() {
        let mut arena = NodeArena::new();
        let id1 = arena.create(text("First"));

        arena.remove(id1);
        assert!(arena.get(id1).is_none());
        assert_eq!(arena.len(), 0);

        // Next create should reuse the freed slot
        let id2 = arena.create(text("Second"));
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_arena_remove_missing() {
        let mut arena = NodeArena::new();
        let id = arena.create(text("x"));
        arena.remove(id);

        assert!(arena.remove(id).is_none());
        assert_eq!(arena.len(), 0);
    }
}
