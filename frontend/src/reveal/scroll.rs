use std::cell::RefCell;
use std::rc::Rc;

use crate::config::Timings;
use crate::timer::{Scheduler, TimerHandle};
use crate::viewport::{Subscription, ViewportObserver};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Animating,
    Shown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTiming {
    pub duration_ms: u32,
    pub stagger_ms: u32,
    pub offset_px: u32,
}

impl RevealTiming {
    /// Start delay for the item at `index` in its grid.
    pub fn delay_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.stagger_ms.saturating_mul(index)
    }

    /// Time from first intersection until the item has fully settled.
    pub fn settle_after(&self, index: usize) -> u32 {
        self.delay_for(index).saturating_add(self.duration_ms)
    }
}

impl From<Timings> for RevealTiming {
    fn from(timings: Timings) -> Self {
        Self {
            duration_ms: timings.reveal_duration_ms,
            stagger_ms: timings.reveal_stagger_ms,
            offset_px: timings.reveal_offset_px,
        }
    }
}

/// One-shot latch: leaves `Hidden` on the first intersection and never goes back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityState {
    phase: RevealPhase,
}

impl Default for VisibilityState {
    fn default() -> Self {
        Self {
            phase: RevealPhase::Hidden,
        }
    }
}

impl VisibilityState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn has_been_shown(&self) -> bool {
        self.phase != RevealPhase::Hidden
    }

    /// Returns true when this event started the entrance transition.
    pub fn intersect(&mut self, is_intersecting: bool) -> bool {
        if is_intersecting && self.phase == RevealPhase::Hidden {
            self.phase = RevealPhase::Animating;
            true
        } else {
            false
        }
    }

    pub fn settle(&mut self) -> bool {
        if self.phase == RevealPhase::Animating {
            self.phase = RevealPhase::Shown;
            true
        } else {
            false
        }
    }

    pub fn show_immediately(&mut self) {
        self.phase = RevealPhase::Shown;
    }
}

/// Inline style for an item in `phase`. The transition is always present so
/// the browser interpolates opacity and offset when the phase flips.
pub fn reveal_style(phase: RevealPhase, timing: &RevealTiming, index: usize) -> String {
    let (opacity, offset) = match phase {
        RevealPhase::Hidden => (0, timing.offset_px),
        RevealPhase::Animating | RevealPhase::Shown => (1, 0),
    };
    format!(
        "opacity: {opacity}; transform: translateY({offset}px); \
         transition: opacity {d}ms ease-out {delay}ms, transform {d}ms ease-out {delay}ms;",
        d = timing.duration_ms,
        delay = timing.delay_for(index),
    )
}

struct Reveal {
    visibility: VisibilityState,
    subscription: Option<Subscription>,
    settle: Option<TimerHandle>,
}

/// Wires a [`VisibilityState`] to a viewport observer and a settle timer.
/// Dropping it releases both.
pub struct ScrollRevealer {
    inner: Rc<RefCell<Reveal>>,
}

impl ScrollRevealer {
    pub fn attach<V, S>(
        viewport: &V,
        target: &V::Target,
        index: usize,
        timing: RevealTiming,
        scheduler: S,
        on_phase: impl Fn(RevealPhase) + 'static,
    ) -> Self
    where
        V: ViewportObserver,
        S: Scheduler + 'static,
    {
        let inner = Rc::new(RefCell::new(Reveal {
            visibility: VisibilityState::new(),
            subscription: None,
            settle: None,
        }));
        let on_phase: Rc<dyn Fn(RevealPhase)> = Rc::new(on_phase);

        let on_change = {
            let weak = Rc::downgrade(&inner);
            let on_phase = on_phase.clone();
            move |is_intersecting: bool| {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                if !inner.borrow_mut().visibility.intersect(is_intersecting) {
                    return;
                }
                let subscription = inner.borrow_mut().subscription.take();
                drop(subscription);
                log::debug!("Revealing item {}", index);
                on_phase(RevealPhase::Animating);

                let settle = scheduler.once(
                    timing.settle_after(index),
                    Box::new({
                        let weak = weak.clone();
                        let on_phase = on_phase.clone();
                        move || {
                            let Some(inner) = weak.upgrade() else {
                                return;
                            };
                            let settled = inner.borrow_mut().visibility.settle();
                            let fired = inner.borrow_mut().settle.take();
                            drop(fired);
                            if settled {
                                on_phase(RevealPhase::Shown);
                            }
                        }
                    }),
                );
                inner.borrow_mut().settle = Some(settle);
            }
        };

        match viewport.observe(target, Box::new(on_change)) {
            Ok(subscription) => {
                // An observer may report synchronously; the latch has already released it then.
                if !inner.borrow().visibility.has_been_shown() {
                    inner.borrow_mut().subscription = Some(subscription);
                }
            }
            Err(e) => {
                log::warn!("Showing item {} without scroll reveal: {}", index, e);
                inner.borrow_mut().visibility.show_immediately();
                on_phase(RevealPhase::Shown);
            }
        }

        Self { inner }
    }

    /// Reveal without an observer, for targets that could not be mounted.
    pub fn shown() -> Self {
        let mut visibility = VisibilityState::new();
        visibility.show_immediately();
        Self {
            inner: Rc::new(RefCell::new(Reveal {
                visibility,
                subscription: None,
                settle: None,
            })),
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.inner.borrow().visibility.phase()
    }

    pub fn dispose(self) {}
}
