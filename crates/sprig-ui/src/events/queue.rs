use super::UiEvent;

/// FIFO queue for UI events
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<UiEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to the back of the queue
    pub fn push(&mut self, event: UiEvent) {
        self.events.push(event);
    }

    /// Drain all events from the queue in FIFO order
    pub fn drain(&mut self) -> impl Iterator<Item = UiEvent> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
