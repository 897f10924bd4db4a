use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use thiserror::Error;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

#[derive(Error, Debug)]
pub enum ViewportError {
    #[error("No browser window available")]
    NoWindow,
    #[error("IntersectionObserver unavailable: {0}")]
    Unsupported(String),
    #[error("Reveal target is not mounted")]
    NotMounted,
}

/// Live viewport subscription. Dropping it stops the notifications.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_once();
    }
}

/// Reports whether a target overlaps the visible scroll area.
pub trait ViewportObserver {
    type Target;

    /// Calls `on_change(is_intersecting)` whenever the intersection state of
    /// `target` changes, until the returned subscription is dropped.
    fn observe(
        &self,
        target: &Self::Target,
        on_change: Box<dyn FnMut(bool)>,
    ) -> Result<Subscription, ViewportError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

impl ViewportObserver for BrowserViewport {
    type Target = Element;

    fn observe(
        &self,
        target: &Element,
        mut on_change: Box<dyn FnMut(bool)>,
    ) -> Result<Subscription, ViewportError> {
        web_sys::window().ok_or(ViewportError::NoWindow)?;

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_change(entry.is_intersecting());
                    }
                }
            },
        );
        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|e| ViewportError::Unsupported(format!("{:?}", e)))?;
        observer.observe(target);

        Ok(Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}

type Watcher = Rc<RefCell<Box<dyn FnMut(bool)>>>;

#[derive(Default)]
struct FakeState {
    next_id: u64,
    watchers: BTreeMap<u64, (usize, Watcher)>,
    unavailable: bool,
}

/// In-memory viewport whose intersection events are fired by hand.
/// Targets are plain numeric ids.
#[derive(Clone, Default)]
pub struct FakeViewport {
    state: Rc<RefCell<FakeState>>,
}

impl FakeViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A viewport that refuses every subscription, like a browser without
    /// `IntersectionObserver`.
    pub fn unavailable() -> Self {
        let viewport = Self::default();
        viewport.state.borrow_mut().unavailable = true;
        viewport
    }

    pub fn subscriptions(&self) -> usize {
        self.state.borrow().watchers.len()
    }

    pub fn fire(&self, target: usize, is_intersecting: bool) {
        let watchers: Vec<Watcher> = self
            .state
            .borrow()
            .watchers
            .values()
            .filter(|(watched, _)| *watched == target)
            .map(|(_, watcher)| watcher.clone())
            .collect();
        for watcher in watchers {
            let mut on_change = watcher.borrow_mut();
            (*on_change)(is_intersecting);
        }
    }
}

impl ViewportObserver for FakeViewport {
    type Target = usize;

    fn observe(
        &self,
        target: &usize,
        on_change: Box<dyn FnMut(bool)>,
    ) -> Result<Subscription, ViewportError> {
        let id = {
            let mut state = self.state.borrow_mut();
            if state.unavailable {
                return Err(ViewportError::Unsupported("fake viewport disabled".to_string()));
            }
            let id = state.next_id;
            state.next_id += 1;
            state
                .watchers
                .insert(id, (*target, Rc::new(RefCell::new(on_change))));
            id
        };
        let weak: Weak<RefCell<FakeState>> = Rc::downgrade(&self.state);
        Ok(Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                let removed = state.borrow_mut().watchers.remove(&id);
                drop(removed);
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn fire_reaches_only_the_matching_target() {
        let viewport = FakeViewport::new();
        let hits = Rc::new(Cell::new(0));
        let _sub = viewport
            .observe(
                &3,
                Box::new({
                    let hits = hits.clone();
                    move |visible| {
                        if visible {
                            hits.set(hits.get() + 1);
                        }
                    }
                }),
            )
            .expect("fake viewport accepts subscriptions");

        viewport.fire(1, true);
        assert_eq!(hits.get(), 0);
        viewport.fire(3, true);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let viewport = FakeViewport::new();
        let sub = viewport.observe(&0, Box::new(|_| {})).unwrap();
        assert_eq!(viewport.subscriptions(), 1);

        sub.unsubscribe();
        assert_eq!(viewport.subscriptions(), 0);
    }

    #[test]
    fn unavailable_viewport_reports_error() {
        let viewport = FakeViewport::unavailable();
        let err = viewport.observe(&0, Box::new(|_| {})).err();
        assert!(matches!(err, Some(ViewportError::Unsupported(_))));
    }
}
