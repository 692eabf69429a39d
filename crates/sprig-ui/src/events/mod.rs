mod queue;

pub use queue::EventQueue;

use sprig_dom::{Event, NodeId};

/// An event addressed to a document node
#[derive(Debug, Clone)]
pub struct UiEvent {
    pub target: NodeId,
    pub event: Event,
}

impl UiEvent {
    pub fn click(target: NodeId) -> Self {
        Self {
            target,
            event: Event::Click,
        }
    }

    pub fn input(target: NodeId, value: impl Into<String>) -> Self {
        Self {
            target,
            event: Event::Input {
                value: value.into(),
            },
        }
    }

    pub fn toggle(target: NodeId, checked: bool) -> Self {
        Self {
            target,
            event: Event::Toggle { checked },
        }
    }
}
