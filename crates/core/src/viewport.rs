//! Viewport dimensions and change notifications.
//!
//! The host (browser window, native window) owns a [`Viewport`] and pushes new
//! dimensions into it. Screens subscribe and receive every change on the same
//! thread. A [`Subscription`] releases its listener when dropped.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Current width/height of the display area, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportDimensions {
    pub width: f32,
    pub height: f32,
}

fn sanitize(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

impl ViewportDimensions {
    /// Negative or non-finite inputs become zero.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

type Listener = Rc<RefCell<Box<dyn FnMut(ViewportDimensions)>>>;

struct Inner {
    dims: Cell<ViewportDimensions>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
    dispatching: Cell<bool>,
    pending: RefCell<VecDeque<ViewportDimensions>>,
}

impl Inner {
    fn listener(&self, id: u64) -> Option<Listener> {
        self.listeners
            .borrow()
            .iter()
            .find(|(lid, _)| *lid == id)
            .map(|(_, l)| Rc::clone(l))
    }

    fn remove(&self, id: u64) {
        self.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
    }

    fn dispatch(&self, dims: ViewportDimensions) {
        self.dims.set(dims);

        let ids: Vec<u64> = self.listeners.borrow().iter().map(|(id, _)| *id).collect();
        trace!(
            width = dims.width,
            height = dims.height,
            listeners = ids.len(),
            "viewport changed"
        );
        for id in ids {
            // Listeners dropped by an earlier callback in this pass are skipped.
            if let Some(listener) = self.listener(id) {
                let mut callback = listener.borrow_mut();
                (*callback)(dims);
            }
        }
    }
}

/// Marks a dispatch pass. Dropping it (including during an unwind) reopens
/// the viewport and discards updates queued by the aborted pass.
struct DispatchGuard<'a> {
    inner: &'a Inner,
}

impl<'a> DispatchGuard<'a> {
    fn enter(inner: &'a Inner) -> Self {
        inner.dispatching.set(true);
        Self { inner }
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.inner.pending.borrow_mut().clear();
        self.inner.dispatching.set(false);
    }
}

/// Host-owned holder of the current [`ViewportDimensions`].
///
/// Cloning yields another handle to the same viewport.
#[derive(Clone)]
pub struct Viewport {
    inner: Rc<Inner>,
}

impl Viewport {
    pub fn new(dims: ViewportDimensions) -> Self {
        Self {
            inner: Rc::new(Inner {
                dims: Cell::new(dims),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(1),
                dispatching: Cell::new(false),
                pending: RefCell::new(VecDeque::new()),
            }),
        }
    }

    pub fn dimensions(&self) -> ViewportDimensions {
        self.inner.dims.get()
    }

    /// Record new dimensions and notify every listener if they changed.
    ///
    /// Calls made from inside a listener are queued and delivered, in order,
    /// once the current pass has finished.
    pub fn set_dimensions(&self, dims: ViewportDimensions) {
        let inner = &self.inner;
        if inner.dispatching.get() {
            inner.pending.borrow_mut().push_back(dims);
            return;
        }

        let _guard = DispatchGuard::enter(inner);
        let mut next = Some(dims);
        while let Some(dims) = next {
            if dims != inner.dims.get() {
                inner.dispatch(dims);
            }
            next = inner.pending.borrow_mut().pop_front();
        }
    }

    /// Register a listener. It stays registered until the returned
    /// [`Subscription`] is dropped.
    #[must_use = "dropping the subscription unregisters the listener immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(ViewportDimensions) + 'static,
    {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(Box::new(listener)))));
        Subscription {
            id,
            viewport: Rc::downgrade(&self.inner),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewport")
            .field("dims", &self.dimensions())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Scoped registration of a viewport listener.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    viewport: Weak<Inner>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.viewport
            .upgrade()
            .is_some_and(|inner| inner.listener(self.id).is_some())
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.viewport.upgrade() {
            inner.remove(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(w: f32, h: f32) -> ViewportDimensions {
        ViewportDimensions::new(w, h)
    }

    #[test]
    fn dimensions_are_clamped_non_negative() {
        let d = dims(-5.0, f32::NAN);
        assert_eq!(d.width, 0.0);
        assert_eq!(d.height, 0.0);
        assert!(d.is_empty());
        assert!(!dims(1.0, 1.0).is_empty());
    }

    #[test]
    fn listeners_receive_changes_until_dropped() {
        let vp = Viewport::new(dims(100.0, 100.0));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sub = {
            let seen = Rc::clone(&seen);
            vp.subscribe(move |d| seen.borrow_mut().push(d))
        };
        assert!(sub.is_active());
        assert_eq!(vp.listener_count(), 1);

        vp.set_dimensions(dims(200.0, 100.0));
        // Unchanged dimensions do not notify.
        vp.set_dimensions(dims(200.0, 100.0));
        assert_eq!(seen.borrow().len(), 1);

        drop(sub);
        assert_eq!(vp.listener_count(), 0);
        vp.set_dimensions(dims(300.0, 100.0));
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(vp.dimensions(), dims(300.0, 100.0));
    }

    #[test]
    fn reentrant_updates_are_queued_in_order() {
        let vp = Viewport::new(dims(10.0, 10.0));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let _a = {
            let vp2 = vp.clone();
            let seen = Rc::clone(&seen);
            vp.subscribe(move |d| {
                seen.borrow_mut().push(("a", d.width));
                if d.width == 20.0 {
                    vp2.set_dimensions(dims(30.0, 10.0));
                    vp2.set_dimensions(dims(40.0, 10.0));
                }
            })
        };
        let _b = {
            let seen = Rc::clone(&seen);
            vp.subscribe(move |d| seen.borrow_mut().push(("b", d.width)))
        };

        vp.set_dimensions(dims(20.0, 10.0));

        assert_eq!(
            *seen.borrow(),
            vec![
                ("a", 20.0),
                ("b", 20.0),
                ("a", 30.0),
                ("b", 30.0),
                ("a", 40.0),
                ("b", 40.0),
            ]
        );
        assert_eq!(vp.dimensions().width, 40.0);
    }

    #[test]
    fn listener_dropped_mid_dispatch_is_skipped() {
        let vp = Viewport::new(dims(10.0, 10.0));
        let hits = Rc::new(Cell::new(0u32));
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let _killer = {
            let victim = Rc::clone(&victim);
            vp.subscribe(move |_| {
                victim.borrow_mut().take();
            })
        };
        {
            let hits = Rc::clone(&hits);
            *victim.borrow_mut() = Some(vp.subscribe(move |_| hits.set(hits.get() + 1)));
        }

        vp.set_dimensions(dims(11.0, 10.0));
        assert_eq!(hits.get(), 0);
        assert_eq!(vp.listener_count(), 1);
    }

    #[test]
    fn panicking_listener_does_not_wedge_viewport() {
        let vp = Viewport::new(dims(1.0, 1.0));
        let hits = Rc::new(Cell::new(0));
        let _sub = {
            let hits = Rc::clone(&hits);
            vp.subscribe(move |d| {
                hits.set(hits.get() + 1);
                if d.width == 2.0 {
                    panic!("listener failed");
                }
            })
        };

        let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            vp.set_dimensions(dims(2.0, 1.0));
        }));
        assert!(caught.is_err());
        assert_eq!(hits.get(), 1);

        vp.set_dimensions(dims(3.0, 1.0));
        assert_eq!(hits.get(), 2);
        assert_eq!(vp.dimensions(), dims(3.0, 1.0));
    }

    #[test]
    fn subscription_outliving_viewport_is_harmless() {
        let vp = Viewport::new(dims(1.0, 1.0));
        let sub = vp.subscribe(|_| {});
        drop(vp);
        assert!(!sub.is_active());
        drop(sub);
    }
}
