mod arena;
mod attrs;
mod document;
mod event;
mod node;
mod serialize;

pub use arena::NodeArena;
pub use attrs::{AttrValue, Attrs};
pub use document::Document;
pub use event::{Event, EventHandler, Listener, Listeners};
pub use node::{Child, Children, ElementNode, Node, NodeId, TextNode};
pub use serialize::to_html;
