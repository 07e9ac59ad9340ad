//! The mounted element tree and its document-wide activation listeners.
//!
//! A widget that needs to react to activations anywhere on screen (a
//! dropdown closing on an outside click) registers a listener with
//! [`Document::on_activation`]. Registration hands back a [`ListenerGuard`];
//! the listener stays live exactly as long as the guard does.
//!
//! Everything here is single-threaded: listeners are plain `Rc` closures and
//! dispatch happens synchronously on the caller's thread.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, trace};

use crate::element::{ancestry, Element};
use crate::hit::hit_test_any;
use crate::layout::LayoutResult;

type Callback = Rc<dyn Fn(&Activation)>;

/// Identifies one listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: BTreeMap<ListenerId, Callback>,
}

/// A pointer or keyboard activation delivered to document listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    /// The activated element, if the activation hit one.
    pub target: Option<String>,
    /// IDs from the document root down to `target`, inclusive.
    /// Empty when the target is absent or not part of the mounted tree.
    pub path: Vec<String>,
}

impl Activation {
    /// Whether the activation landed on `id` or one of its descendants.
    pub fn is_within(&self, id: &str) -> bool {
        self.path.iter().any(|p| p == id)
    }
}

/// Owns the mounted element tree and the activation listener registry.
#[derive(Default)]
pub struct Document {
    root: Option<Element>,
    listeners: Rc<RefCell<Listeners>>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.root.as_ref().map(|r| &r.id))
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the mounted tree. Hosts re-mount after every render.
    pub fn mount(&mut self, root: Element) {
        trace!("Document::mount root={}", root.id);
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<&Element> {
        self.root.as_ref()
    }

    /// Register a document-wide activation listener.
    ///
    /// The listener is removed when the returned guard is dropped.
    #[must_use = "the listener is removed as soon as the guard is dropped"]
    pub fn on_activation(&self, callback: impl Fn(&Activation) + 'static) -> ListenerGuard {
        let mut listeners = self.listeners.borrow_mut();
        let id = ListenerId(listeners.next_id);
        listeners.next_id += 1;
        listeners.entries.insert(id, Rc::new(callback));
        debug!("Document: registered {} (live={})", id, listeners.entries.len());

        ListenerGuard {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Number of live listener registrations.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }

    /// Deliver an activation of `target` to every live listener.
    pub fn activate(&self, target: Option<&str>) -> Activation {
        let path = match (target, self.root.as_ref()) {
            (Some(id), Some(root)) => ancestry(root, id).unwrap_or_default(),
            _ => Vec::new(),
        };
        let activation = Activation {
            target: target.map(str::to_string),
            path,
        };
        self.dispatch(&activation);
        activation
    }

    /// Hit-test a pointer activation at (x, y) and deliver it.
    pub fn click(&self, layout: &LayoutResult, x: u16, y: u16) -> Activation {
        let target = self
            .root
            .as_ref()
            .and_then(|root| hit_test_any(layout, root, x, y));
        self.activate(target.as_deref())
    }

    fn dispatch(&self, activation: &Activation) {
        // Snapshot so listeners can drop guards (their own included) mid-dispatch.
        let callbacks: Vec<Callback> = self.listeners.borrow().entries.values().cloned().collect();
        trace!(
            "Document: activation target={:?} listeners={}",
            activation.target,
            callbacks.len()
        );
        for callback in callbacks {
            callback(activation);
        }
    }
}

/// Keeps a document listener registered. Dropping it deregisters.
pub struct ListenerGuard {
    id: ListenerId,
    listeners: Weak<RefCell<Listeners>>,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ListenerGuard").field(&self.id).finish()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        // The document may already be gone.
        if let Some(listeners) = self.listeners.upgrade() {
            let mut listeners = listeners.borrow_mut();
            listeners.entries.remove(&self.id);
            debug!("Document: released {} (live={})", self.id, listeners.entries.len());
        }
    }
}
