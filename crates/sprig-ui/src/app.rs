use std::cell::RefCell;
use std::rc::Rc;

use sprig_dom::{Document, Event, NodeId};
use thiserror::Error;
use tracing::debug;

use crate::component::{Component, Mounted};
use crate::events::{EventQueue, UiEvent};
use crate::render::Renderer;

#[derive(Error, Debug)]
pub enum UiError {
    #[error("mount target {0:?} is not in the document")]
    MountTargetMissing(NodeId),
}

pub type Result<T> = std::result::Result<T, UiError>;

/// Application shell combining one document, an event queue, and a renderer.
pub struct App<R: Renderer> {
    dom: Rc<RefCell<Document>>,
    events: EventQueue,
    renderer: R,
    root: Option<NodeId>,
}

impl<R: Renderer> App<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            dom: Rc::new(RefCell::new(Document::new())),
            events: EventQueue::new(),
            renderer,
            root: None,
        }
    }

    /// The shared document; build mount targets through it
    pub fn dom(&self) -> &Rc<RefCell<Document>> {
        &self.dom
    }

    /// Mount a component under an explicit target node.
    pub fn mount<C: Component>(&mut self, component: C, target: NodeId) -> Result<Mounted<C>> {
        if !self.dom.borrow().contains(target) {
            return Err(UiError::MountTargetMissing(target));
        }
        let mounted = Mounted::new(component, self.dom.clone());
        let node = mounted.node();
        self.dom.borrow_mut().append_child(target, node);
        if self.root.is_none() {
            self.root = Some(target);
        }
        self.renderer.mount(&self.dom.borrow(), target);
        debug!(?target, ?node, "component mounted");
        Ok(mounted)
    }

    /// Queue an event for the next pump
    pub fn push_event(&mut self, event: UiEvent) {
        self.events.push(event);
    }

    /// Dispatch one event synchronously to completion.
    ///
    /// Live properties track the event before any handler runs (two-way
    /// binding), and no document borrow is held across handler invocation.
    pub fn dispatch(&mut self, event: UiEvent) {
        let handlers = {
            let mut doc = self.dom.borrow_mut();
            match &event.event {
                Event::Input { value } => doc.set_value(event.target, value.clone()),
                Event::Toggle { checked } => doc.set_checked(event.target, *checked),
                Event::Click => {}
            }
            doc.handlers_for(event.target, event.event.name())
        };
        debug!(
            target = ?event.target,
            name = event.event.name(),
            handlers = handlers.len(),
            "dispatching event"
        );
        for handler in handlers {
            handler(&event.event);
        }
    }

    /// Drain the queue in FIFO order, then give the renderer an update pass
    pub fn pump(&mut self) {
        let events: Vec<UiEvent> = self.events.drain().collect();
        if events.is_empty() {
            return;
        }
        for event in events {
            self.dispatch(event);
        }
        if let Some(root) = self.root {
            self.renderer.update(&self.dom.borrow(), root);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Scope;
    use crate::render::TreeRenderer;
    use sprig_dom::{Attrs, Children, Listeners};

    struct Echo;

    impl Component for Echo {
        fn render(&self, dom: &mut Document, _scope: &Scope<Self>) -> NodeId {
            dom.build("p", Attrs::new(), Children::from("echo"), Listeners::new())
        }
    }

    #[test]
    fn test_mount_missing_target() {
        let mut app = App::new(TreeRenderer::new());
        let stale = app
            .dom()
            .borrow_mut()
            .build("div", Attrs::new(), Children::None, Listeners::new());
        app.dom().borrow_mut().remove_subtree(stale);

        let result = app.mount(Echo, stale);
        assert!(matches!(result, Err(UiError::MountTargetMissing(_))));
    }

    #[test]
    fn test_mount_attaches_under_target() {
        let mut app = App::new(TreeRenderer::new());
        let body = app
            .dom()
            .borrow_mut()
            .build("body", Attrs::new(), Children::None, Listeners::new());

        let mounted = app.mount(Echo, body).unwrap();
        let node = mounted.node();

        let doc = app.dom().borrow();
        assert_eq!(doc.children(body), &[node]);
        assert_eq!(doc.parent(node), Some(body));
    }

    #[test]
    fn test_dispatch_applies_two_way_binding() {
        let mut app = App::new(TreeRenderer::new());
        let field = app.dom().borrow_mut().build(
            "input",
            Attrs::new().set("type", "text"),
            Children::None,
            Listeners::new(),
        );
        let checkbox = app.dom().borrow_mut().build(
            "input",
            Attrs::new().set("type", "checkbox").set("checked", false),
            Children::None,
            Listeners::new(),
        );

        app.dispatch(UiEvent::input(field, "typed"));
        app.dispatch(UiEvent::toggle(checkbox, true));

        let doc = app.dom().borrow();
        assert_eq!(doc.value(field), Some("typed"));
        assert_eq!(doc.checked(checkbox), Some(true));
    }

    #[test]
    fn test_pump_drains_queue() {
        let mut app = App::new(TreeRenderer::new());
        let field = app.dom().borrow_mut().build(
            "input",
            Attrs::new().set("type", "text"),
            Children::None,
            Listeners::new(),
        );

        app.push_event(UiEvent::input(field, "a"));
        app.push_event(UiEvent::input(field, "ab"));
        app.pump();

        assert_eq!(app.dom().borrow().value(field), Some("ab"));
        assert!(app.events.is_empty());
    }
}
