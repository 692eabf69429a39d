use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;
use smartstring::{LazyCompact, SmartString};

/// Events that can be delivered to document nodes
#[derive(Debug, Clone)]
pub enum Event {
    /// Button click
    Click,
    /// Text input edit, carrying the full current value
    Input { value: String },
    /// Checkbox toggle
    Toggle { checked: bool },
}

impl Event {
    /// Name the event dispatches under. Checkbox toggles arrive as the DOM
    /// "change" event.
    pub fn name(&self) -> &'static str {
        match self {
            Event::Click => "click",
            Event::Input { .. } => "input",
            Event::Toggle { .. } => "change",
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Event::Input { value } => Some(value),
            _ => None,
        }
    }

    pub fn checked(&self) -> Option<bool> {
        match self {
            Event::Toggle { checked } => Some(*checked),
            _ => None,
        }
    }
}

/// Handler invoked when a matching event reaches its node
pub type EventHandler = Rc<dyn Fn(&Event)>;

/// One registered (event name, handler) pair
#[derive(Clone)]
pub struct Listener {
    pub event: SmartString<LazyCompact>,
    pub handler: EventHandler,
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

/// Ordered listener collection for the element builder. Entries with an
/// empty event name are silently skipped.
#[derive(Debug, Clone, Default)]
pub struct Listeners(pub(crate) SmallVec<[Listener; 2]>);

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, event: &str, handler: EventHandler) -> Self {
        if !event.is_empty() {
            self.0.push(Listener {
                event: event.into(),
                handler,
            });
        }
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
