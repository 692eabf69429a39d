use std::cell::RefCell;
use std::rc::{Rc, Weak};

use sprig_dom::{Document, Event, EventHandler, NodeId};
use tracing::trace;

/// A stateful unit that owns a state value and produces a node tree from it
/// on demand.
///
/// Only concrete component kinds implement this trait; there is no abstract
/// base to instantiate by mistake and no unimplemented render to hit at
/// runtime.
pub trait Component: Sized + 'static {
    /// Project the current state into a fresh node tree. Pure function of
    /// state: two calls on unchanged state yield structurally equivalent
    /// (though distinct) trees.
    fn render(&self, dom: &mut Document, scope: &Scope<Self>) -> NodeId;
}

struct Inner<C> {
    component: C,
    node: Option<NodeId>,
}

/// A component bound to a document, caching its most recent node.
///
/// The cached node, when present, is always the latest `render` output for
/// the current state: every mutating callback refreshes it before returning.
pub struct Mounted<C: Component> {
    inner: Rc<RefCell<Inner<C>>>,
    dom: Rc<RefCell<Document>>,
}

impl<C: Component> Mounted<C> {
    pub fn new(component: C, dom: Rc<RefCell<Document>>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                component,
                node: None,
            })),
            dom,
        }
    }

    pub fn scope(&self) -> Scope<C> {
        Scope {
            inner: Rc::downgrade(&self.inner),
            dom: Rc::downgrade(&self.dom),
        }
    }

    /// The cached node if present; otherwise render once, cache, and return.
    pub fn node(&self) -> NodeId {
        let mut inner = self.inner.borrow_mut();
        if let Some(id) = inner.node {
            return id;
        }
        let scope = self.scope();
        let id = inner.component.render(&mut self.dom.borrow_mut(), &scope);
        inner.node = Some(id);
        id
    }

    /// Re-render and swap the cached node in place when it is attached; the
    /// cache moves to the fresh node either way.
    pub fn request_update(&self) {
        let scope = self.scope();
        let mut inner = self.inner.borrow_mut();
        refresh(&mut inner, &self.dom, &scope);
    }

    /// Read access to the component state.
    pub fn with<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        f(&self.inner.borrow().component)
    }
}

fn refresh<C: Component>(inner: &mut Inner<C>, dom: &Rc<RefCell<Document>>, scope: &Scope<C>) {
    let mut doc = dom.borrow_mut();
    let fresh = inner.component.render(&mut doc, scope);
    if let Some(old) = inner.node.take() {
        doc.replace(old, fresh);
    }
    inner.node = Some(fresh);
    trace!(node = ?fresh, "component refreshed");
}

/// Weak handle into a mounted component, cheap to clone into event handlers.
pub struct Scope<C: Component> {
    inner: Weak<RefCell<Inner<C>>>,
    dom: Weak<RefCell<Document>>,
}

impl<C: Component> Clone for Scope<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            dom: self.dom.clone(),
        }
    }
}

impl<C: Component> Scope<C> {
    /// Wrap a state transition into an event handler.
    ///
    /// The closure reports whether the change needs a re-render; `true`
    /// triggers a full replace-update of the component's node. Dispatch
    /// against a dropped component is a silent no-op.
    pub fn callback<F>(&self, f: F) -> EventHandler
    where
        F: Fn(&mut C, &Event) -> bool + 'static,
    {
        let scope = self.clone();
        Rc::new(move |event: &Event| {
            let (Some(inner), Some(dom)) = (scope.inner.upgrade(), scope.dom.upgrade()) else {
                return;
            };
            let mut inner = inner.borrow_mut();
            if f(&mut inner.component, event) {
                refresh(&mut inner, &dom, &scope);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_dom::{Attrs, Children, Event, Listeners};

    struct Counter {
        count: i32,
    }

    impl Component for Counter {
        fn render(&self, dom: &mut Document, scope: &Scope<Self>) -> NodeId {
            let bump = scope.callback(|c: &mut Counter, _| {
                c.count += 1;
                true
            });
            dom.build(
                "button",
                Attrs::new(),
                Children::from(format!("count: {}", self.count)),
                Listeners::new().on("click", bump),
            )
        }
    }

    fn shared_doc() -> Rc<RefCell<Document>> {
        Rc::new(RefCell::new(Document::new()))
    }

    fn label(doc: &Rc<RefCell<Document>>, node: NodeId) -> String {
        let doc = doc.borrow();
        doc.text(doc.children(node)[0]).unwrap().to_string()
    }

    #[test]
    fn test_node_is_cached() {
        let dom = shared_doc();
        let mounted = Mounted::new(Counter { count: 0 }, dom.clone());

        let first = mounted.node();
        let count_after_first = dom.borrow().len();
        let second = mounted.node();

        assert_eq!(first, second);
        assert_eq!(dom.borrow().len(), count_after_first);
    }

    #[test]
    fn test_request_update_swaps_in_place() {
        let dom = shared_doc();
        let body = dom
            .borrow_mut()
            .build("body", Attrs::new(), Children::None, Listeners::new());
        let before = dom
            .borrow_mut()
            .create_text("before");
        let after = dom.borrow_mut().create_text("after");
        dom.borrow_mut().append_child(body, before);

        let mounted = Mounted::new(Counter { count: 7 }, dom.clone());
        let old = mounted.node();
        dom.borrow_mut().append_child(body, old);
        dom.borrow_mut().append_child(body, after);

        mounted.request_update();
        let fresh = mounted.node();

        let doc = dom.borrow();
        assert_ne!(old, fresh);
        assert!(!doc.contains(old));
        assert_eq!(doc.children(body), &[before, fresh, after]);
        drop(doc);
        assert_eq!(label(&dom, fresh), "count: 7");
    }

    #[test]
    fn test_request_update_while_detached() {
        let dom = shared_doc();
        let mounted = Mounted::new(Counter { count: 0 }, dom.clone());
        let old = mounted.node();

        mounted.request_update();
        let fresh = mounted.node();

        assert_ne!(old, fresh);
        assert!(!dom.borrow().contains(old));
        assert_eq!(dom.borrow().parent(fresh), None);
    }

    #[test]
    fn test_callback_mutates_and_rerenders() {
        let dom = shared_doc();
        let body = dom
            .borrow_mut()
            .build("body", Attrs::new(), Children::None, Listeners::new());
        let mounted = Mounted::new(Counter { count: 0 }, dom.clone());
        let node = mounted.node();
        dom.borrow_mut().append_child(body, node);

        let handlers = dom.borrow().handlers_for(node, "click");
        assert_eq!(handlers.len(), 1);
        handlers[0](&Event::Click);

        assert_eq!(mounted.with(|c| c.count), 1);
        let fresh = mounted.node();
        assert_ne!(fresh, node);
        assert_eq!(label(&dom, fresh), "count: 1");
        assert_eq!(dom.borrow().children(body), &[fresh]);
    }

    #[test]
    fn test_callback_after_drop_is_noop() {
        let dom = shared_doc();
        let mounted = Mounted::new(Counter { count: 0 }, dom.clone());
        let node = mounted.node();
        let handlers = dom.borrow().handlers_for(node, "click");

        drop(mounted);
        // Must not panic or touch the document
        handlers[0](&Event::Click);
    }
}
