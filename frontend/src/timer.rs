use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};

/// Owned handle to a scheduled callback. Dropping it cancels the timer.
#[must_use = "dropping a TimerHandle cancels the timer"]
pub struct TimerHandle {
    release: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn cancel(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.release_once();
    }
}

/// Source of timers for the reveal and rotation drivers.
pub trait Scheduler {
    /// Runs `callback` once after `delay_ms`.
    fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle;
    /// Runs `callback` every `period_ms` until the handle is released.
    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> TimerHandle;
}

/// `setTimeout` / `setInterval` through gloo-timers.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let timeout = Timeout::new(delay_ms, callback);
        TimerHandle::new(move || drop(timeout))
    }

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> TimerHandle {
        let interval = Interval::new(period_ms, callback);
        TimerHandle::new(move || drop(interval))
    }
}

enum Task {
    Once(Box<dyn FnOnce()>),
    Every(Box<dyn FnMut()>, u64),
}

struct Entry {
    due: u64,
    task: Task,
}

#[derive(Default)]
struct ClockState {
    now: u64,
    next_id: u64,
    entries: BTreeMap<u64, Entry>,
    running: Option<u64>,
    running_cancelled: bool,
}

/// Deterministic scheduler whose time only moves when [`ManualClock::advance`]
/// is called. Used by the unit tests to drive timers tick by tick.
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.state.borrow().now
    }

    /// Number of callbacks that are still waiting to fire.
    pub fn pending(&self) -> usize {
        self.state.borrow().entries.len()
    }

    /// Moves time forward by `ms`, firing every callback that falls due in
    /// order of due time. Callbacks may schedule or cancel other timers.
    pub fn advance(&self, ms: u64) {
        let target = self.now() + ms;
        while let Some(id) = self.next_due(target) {
            let entry = {
                let mut state = self.state.borrow_mut();
                let Some(entry) = state.entries.remove(&id) else {
                    break;
                };
                state.now = entry.due;
                state.running = Some(id);
                state.running_cancelled = false;
                entry
            };

            let rearm = match entry.task {
                Task::Once(callback) => {
                    callback();
                    None
                }
                Task::Every(mut callback, period) => {
                    callback();
                    Some((callback, period))
                }
            };

            let mut state = self.state.borrow_mut();
            let cancelled = state.running_cancelled;
            state.running = None;
            if let Some((callback, period)) = rearm {
                if !cancelled {
                    state.entries.insert(
                        id,
                        Entry {
                            due: entry.due + period,
                            task: Task::Every(callback, period),
                        },
                    );
                }
            }
        }
        self.state.borrow_mut().now = target;
    }

    fn next_due(&self, target: u64) -> Option<u64> {
        self.state
            .borrow()
            .entries
            .iter()
            .filter(|(_, entry)| entry.due <= target)
            .min_by_key(|(id, entry)| (entry.due, **id))
            .map(|(id, _)| *id)
    }

    fn insert(&self, delay_ms: u32, task: Task) -> TimerHandle {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let due = state.now + u64::from(delay_ms);
            state.entries.insert(id, Entry { due, task });
            id
        };
        let weak: Weak<RefCell<ClockState>> = Rc::downgrade(&self.state);
        TimerHandle::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let removed = {
                let mut state = state.borrow_mut();
                let removed = state.entries.remove(&id);
                if removed.is_none() && state.running == Some(id) {
                    state.running_cancelled = true;
                }
                removed
            };
            // The removed callback may own other handles; drop it outside the borrow.
            drop(removed);
        })
    }
}

impl Scheduler for ManualClock {
    fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        self.insert(delay_ms, Task::Once(callback))
    }

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> TimerHandle {
        let period = u64::from(period_ms.max(1));
        self.insert(period_ms.max(1), Task::Every(callback, period))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let bump = {
            let count = count.clone();
            move || count.set(count.get() + 1)
        };
        (count, bump)
    }

    #[test]
    fn once_fires_exactly_at_due_time() {
        let clock = ManualClock::new();
        let (count, bump) = counter();
        let _handle = clock.once(100, Box::new(bump));

        clock.advance(99);
        assert_eq!(count.get(), 0);
        assert_eq!(clock.pending(), 1);

        clock.advance(1);
        assert_eq!(count.get(), 1);
        assert_eq!(clock.pending(), 0);

        clock.advance(1_000);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn every_repeats_until_cancelled() {
        let clock = ManualClock::new();
        let (count, bump) = counter();
        let handle = clock.every(50, Box::new(bump));

        clock.advance(175);
        assert_eq!(count.get(), 3);
        assert_eq!(clock.pending(), 1);

        handle.cancel();
        assert_eq!(clock.pending(), 0);
        clock.advance(500);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn dropping_handle_cancels() {
        let clock = ManualClock::new();
        let (count, bump) = counter();
        drop(clock.once(10, Box::new(bump)));

        assert_eq!(clock.pending(), 0);
        clock.advance(20);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn interval_cancelled_from_its_own_callback_does_not_rearm() {
        let clock = ManualClock::new();
        let slot: Rc<RefCell<Option<TimerHandle>>> = Rc::new(RefCell::new(None));
        let fired = Rc::new(Cell::new(0));
        let handle = clock.every(
            10,
            Box::new({
                let slot = slot.clone();
                let fired = fired.clone();
                move || {
                    fired.set(fired.get() + 1);
                    slot.borrow_mut().take();
                }
            }),
        );
        *slot.borrow_mut() = Some(handle);

        clock.advance(100);
        assert_eq!(fired.get(), 1);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn callbacks_fire_in_due_order() {
        let clock = ManualClock::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut handles = Vec::new();
        for (delay, label) in [(30, "c"), (10, "a"), (20, "b")] {
            let order = order.clone();
            handles.push(clock.once(delay, Box::new(move || order.borrow_mut().push(label))));
        }

        clock.advance(30);
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
        assert_eq!(clock.now(), 30);
    }
}
