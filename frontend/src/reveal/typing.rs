use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::timer::{Scheduler, TimerHandle};

/// Progress of a typewriter over a fixed string. Counts characters, not bytes,
/// so the visible prefix always ends on a char boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealState {
    source: String,
    revealed: usize,
    revealed_bytes: usize,
}

impl RevealState {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            revealed: 0,
            revealed_bytes: 0,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn text(&self) -> &str {
        &self.source[..self.revealed_bytes]
    }

    pub fn is_complete(&self) -> bool {
        self.revealed_bytes == self.source.len()
    }

    /// Reveals the next character. Returns false once everything is shown.
    pub fn tick(&mut self) -> bool {
        match self.source[self.revealed_bytes..].chars().next() {
            Some(c) => {
                self.revealed_bytes += c.len_utf8();
                self.revealed += 1;
                true
            }
            None => false,
        }
    }
}

struct Typing {
    state: RevealState,
    pending: Option<TimerHandle>,
}

/// Drives a [`RevealState`] with a chain of single-shot timers.
/// Dropping the revealer cancels the pending tick.
pub struct TypingRevealer {
    inner: Rc<RefCell<Typing>>,
}

impl TypingRevealer {
    pub fn start<S>(
        source: impl Into<String>,
        delay_ms: u32,
        scheduler: S,
        on_update: impl Fn(&str) + 'static,
    ) -> Self
    where
        S: Scheduler + Clone + 'static,
    {
        let inner = Rc::new(RefCell::new(Typing {
            state: RevealState::new(source),
            pending: None,
        }));
        schedule_tick(Rc::downgrade(&inner), scheduler, delay_ms, Rc::new(on_update));
        Self { inner }
    }

    pub fn text(&self) -> String {
        self.inner.borrow().state.text().to_owned()
    }

    pub fn revealed_count(&self) -> usize {
        self.inner.borrow().state.revealed_count()
    }

    pub fn is_complete(&self) -> bool {
        self.inner.borrow().state.is_complete()
    }

    pub fn dispose(self) {}
}

fn schedule_tick<S>(
    typing: Weak<RefCell<Typing>>,
    scheduler: S,
    delay_ms: u32,
    on_update: Rc<dyn Fn(&str)>,
) where
    S: Scheduler + Clone + 'static,
{
    let Some(inner) = typing.upgrade() else {
        return;
    };
    if inner.borrow().state.is_complete() {
        let finished = inner.borrow_mut().pending.take();
        drop(finished);
        return;
    }

    let next = scheduler.clone();
    let handle = scheduler.once(
        delay_ms,
        Box::new(move || {
            let Some(inner) = typing.upgrade() else {
                return;
            };
            let text = {
                let mut inner = inner.borrow_mut();
                inner.state.tick();
                inner.state.text().to_owned()
            };
            on_update(&text);
            schedule_tick(typing, next, delay_ms, on_update);
        }),
    );
    let previous = inner.borrow_mut().pending.replace(handle);
    drop(previous);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualClock;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let record = {
            let seen = seen.clone();
            move |text: &str| seen.borrow_mut().push(text.to_owned())
        };
        (seen, record)
    }

    #[test]
    fn reveal_state_counts_characters() {
        let mut state = RevealState::new("aé字");
        assert!(state.tick());
        assert!(state.tick());
        assert_eq!(state.text(), "aé");
        assert_eq!(state.revealed_count(), 2);
        assert!(state.tick());
        assert!(state.is_complete());
        assert!(!state.tick());
        assert_eq!(state.text(), "aé字");
    }

    #[test]
    fn headline_reveals_one_character_per_tick() {
        let clock = ManualClock::new();
        let (seen, record) = recorder();
        let revealer = TypingRevealer::start("遅刻なの事故なの？", 100, clock.clone(), record);
        assert_eq!(revealer.text(), "");

        clock.advance(100);
        assert_eq!(revealer.text(), "遅");

        clock.advance(800);
        assert_eq!(revealer.text(), "遅刻なの事故なの？");
        assert_eq!(revealer.revealed_count(), 9);
        assert!(revealer.is_complete());
        assert_eq!(seen.borrow().len(), 9);
        assert_eq!(clock.pending(), 0);

        clock.advance(10_000);
        assert_eq!(seen.borrow().len(), 9);
        assert_eq!(revealer.text(), "遅刻なの事故なの？");
    }

    #[test]
    fn output_after_len_ticks_is_the_source() {
        for source in ["a", "hello", "kratは安全", "  spaced  "] {
            let clock = ManualClock::new();
            let revealer = TypingRevealer::start(source, 100, clock.clone(), |_| {});
            let len = source.chars().count() as u64;

            clock.advance(100 * (len - 1));
            assert_ne!(revealer.text(), source);
            clock.advance(100);
            assert_eq!(revealer.text(), source);
            assert_eq!(clock.pending(), 0);
        }
    }

    #[test]
    fn empty_source_schedules_nothing() {
        let clock = ManualClock::new();
        let (seen, record) = recorder();
        let revealer = TypingRevealer::start("", 100, clock.clone(), record);

        assert_eq!(clock.pending(), 0);
        clock.advance(1_000);
        assert_eq!(revealer.text(), "");
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn disposing_mid_reveal_cancels_the_pending_tick() {
        let clock = ManualClock::new();
        let (seen, record) = recorder();
        let revealer = TypingRevealer::start("遅刻なの事故なの？", 100, clock.clone(), record);

        clock.advance(300);
        assert_eq!(seen.borrow().last().map(String::as_str), Some("遅刻な"));
        assert_eq!(clock.pending(), 1);

        revealer.dispose();
        assert_eq!(clock.pending(), 0);
        clock.advance(1_000);
        assert_eq!(seen.borrow().len(), 3);
    }
}
