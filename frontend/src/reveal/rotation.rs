use std::cell::RefCell;
use std::rc::Rc;

use crate::content::Testimonial;
use crate::timer::{Scheduler, TimerHandle};

/// Round-robin cursor over a fixed list. An empty list has no active entry.
#[derive(Debug)]
pub struct RotatorState<T> {
    items: Rc<[T]>,
    active: usize,
}

impl<T> RotatorState<T> {
    pub fn new(items: Rc<[T]>) -> Self {
        Self { items, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.active)
    }

    pub fn active(&self) -> Option<&T> {
        self.items.get(self.active)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_index() == Some(index)
    }

    pub fn advance(&mut self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        self.active = (self.active + 1) % self.items.len();
        Some(self.active)
    }
}

/// Advances a [`RotatorState`] on a repeating timer and reports the new
/// active index. Nothing is scheduled for an empty list.
pub struct TestimonialRotator<T = Testimonial> {
    state: Rc<RefCell<RotatorState<T>>>,
    interval: Option<TimerHandle>,
}

impl<T: 'static> TestimonialRotator<T> {
    pub fn start<S: Scheduler>(
        items: Rc<[T]>,
        interval_ms: u32,
        scheduler: &S,
        on_change: impl Fn(usize) + 'static,
    ) -> Self {
        let state = Rc::new(RefCell::new(RotatorState::new(items)));
        if state.borrow().is_empty() {
            log::debug!("No testimonials to rotate");
            return Self {
                state,
                interval: None,
            };
        }

        let weak = Rc::downgrade(&state);
        let interval = scheduler.every(
            interval_ms,
            Box::new(move || {
                let Some(state) = weak.upgrade() else {
                    return;
                };
                let next = state.borrow_mut().advance();
                if let Some(index) = next {
                    on_change(index);
                }
            }),
        );

        Self {
            state,
            interval: Some(interval),
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.state.borrow().active_index()
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    pub fn dispose(self) {}
}

impl<T: Clone> TestimonialRotator<T> {
    pub fn active(&self) -> Option<T> {
        self.state.borrow().active().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TESTIMONIALS;
    use crate::timer::ManualClock;

    fn three() -> Rc<[u8]> {
        Rc::from(vec![10, 20, 30])
    }

    #[test]
    fn advance_wraps_around() {
        let mut state = RotatorState::new(three());
        assert_eq!(state.active_index(), Some(0));
        assert_eq!(state.advance(), Some(1));
        assert_eq!(state.advance(), Some(2));
        assert_eq!(state.advance(), Some(0));
        assert!(state.is_active(0));
        assert!(!state.is_active(1));
    }

    #[test]
    fn n_ticks_land_on_n_mod_len() {
        for ticks in 0..10u64 {
            let clock = ManualClock::new();
            let rotator = TestimonialRotator::start(three(), 5_000, &clock, |_| {});
            clock.advance(5_000 * ticks);
            assert_eq!(rotator.active_index(), Some((ticks % 3) as usize));
        }
    }

    #[test]
    fn seed_testimonials_cycle_in_order() {
        let clock = ManualClock::new();
        let items: Rc<[Testimonial]> = Rc::from(TESTIMONIALS);
        let rotator = TestimonialRotator::start(items, 5_000, &clock, |_| {});

        let mut names = Vec::new();
        for _ in 0..4 {
            names.extend(rotator.active().map(|t| t.name));
            clock.advance(5_000);
        }
        assert_eq!(names, vec!["山田さん", "佐藤さん", "鈴木さん", "山田さん"]);
    }

    #[test]
    fn notifies_each_new_index() {
        let clock = ManualClock::new();
        let seen = Rc::new(RefCell::new(Vec::<usize>::new()));
        let _rotator = TestimonialRotator::start(three(), 100, &clock, {
            let seen = seen.clone();
            move |index: usize| seen.borrow_mut().push(index)
        });

        clock.advance(400);
        assert_eq!(*seen.borrow(), vec![1, 2, 0, 1]);
    }

    #[test]
    fn empty_list_renders_nothing_and_never_ticks() {
        let clock = ManualClock::new();
        let rotator = TestimonialRotator::start(Rc::<[u8]>::from(Vec::new()), 5_000, &clock, |_| {
            panic!("empty rotator must not tick")
        });

        assert!(!rotator.is_running());
        assert_eq!(clock.pending(), 0);
        clock.advance(60_000);
        assert_eq!(rotator.active_index(), None);
        assert_eq!(rotator.active(), None);
    }

    #[test]
    fn disposing_releases_the_interval() {
        let clock = ManualClock::new();
        let rotator = TestimonialRotator::start(three(), 5_000, &clock, |_| {});
        clock.advance(7_500);
        assert_eq!(clock.pending(), 1);

        rotator.dispose();
        assert_eq!(clock.pending(), 0);
    }
}
