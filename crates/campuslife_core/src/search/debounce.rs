//! Temporal coalescing of rapid call streams.
//!
//! # Responsibility
//! - Collapse a burst of calls into one delayed fire with the latest args.
//!
//! # Invariants
//! - At most one fire is pending at any time.
//! - Every call replaces the pending args and pushes the deadline to
//!   `call time + delay`.
//! - A fire never happens before its deadline.
//!
//! The debouncer owns no timer. Callers pass the current [`Instant`] on every
//! call and poll, which keeps it usable from any event loop and from tests
//! without sleeping.

use std::time::{Duration, Instant};

/// Debouncer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebounceState<A> {
    Idle,
    Pending { args: A, deadline: Instant },
}

/// Pure debounce state machine: `Idle -> Pending -> (fire) -> Idle`.
#[derive(Debug, Clone)]
pub struct Debouncer<A> {
    delay: Duration,
    state: DebounceState<A>,
}

impl<A> Debouncer<A> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: DebounceState::Idle,
        }
    }

    pub fn state(&self) -> &DebounceState<A> {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::Pending { .. })
    }

    /// Deadline of the pending fire, if any.
    pub fn deadline(&self) -> Option<Instant> {
        match &self.state {
            DebounceState::Idle => None,
            DebounceState::Pending { deadline, .. } => Some(*deadline),
        }
    }

    /// Records a call at `now`, superseding any pending fire.
    pub fn call(&mut self, args: A, now: Instant) {
        self.state = DebounceState::Pending {
            args,
            deadline: now + self.delay,
        };
    }

    /// Returns the pending args once `now` has reached the deadline.
    pub fn poll(&mut self, now: Instant) -> Option<A> {
        match self.deadline() {
            Some(deadline) if now >= deadline => {}
            _ => return None,
        }

        match std::mem::replace(&mut self.state, DebounceState::Idle) {
            DebounceState::Pending { args, .. } => Some(args),
            DebounceState::Idle => None,
        }
    }
}

/// A callback wrapped by a [`Debouncer`].
pub struct Debounced<A, F>
where
    F: FnMut(A),
{
    debouncer: Debouncer<A>,
    callback: F,
}

impl<A, F> Debounced<A, F>
where
    F: FnMut(A),
{
    pub fn new(delay: Duration, callback: F) -> Self {
        Self {
            debouncer: Debouncer::new(delay),
            callback,
        }
    }

    pub fn call(&mut self, args: A, now: Instant) {
        self.debouncer.call(args, now);
    }

    /// Invokes the callback if a fire is due. Returns whether it fired.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(args) => {
                (self.callback)(args);
                true
            }
            None => false,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }
}

/// Wraps `callback` so bursts of calls collapse into one delayed invocation.
pub fn debounce<A, F>(callback: F, delay: Duration) -> Debounced<A, F>
where
    F: FnMut(A),
{
    Debounced::new(delay, callback)
}

#[cfg(test)]
mod tests {
    use super::{debounce, DebounceState, Debouncer};
    use std::time::{Duration, Instant};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn idle_poll_does_nothing() {
        let mut debouncer: Debouncer<u8> = Debouncer::new(ms(300));
        assert_eq!(debouncer.poll(Instant::now()), None);
        assert_eq!(debouncer.state(), &DebounceState::Idle);
    }

    #[test]
    fn fires_once_then_returns_to_idle() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(100));
        debouncer.call("a", start);

        assert_eq!(debouncer.poll(start + ms(100)), Some("a"));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + ms(500)), None);
    }

    #[test]
    fn later_call_resets_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));
        debouncer.call(1, start);
        debouncer.call(2, start + ms(250));

        assert_eq!(debouncer.poll(start + ms(300)), None);
        assert_eq!(debouncer.deadline(), Some(start + ms(550)));
        assert_eq!(debouncer.poll(start + ms(550)), Some(2));
    }

    #[test]
    fn wrapped_callback_receives_last_args() {
        let start = Instant::now();
        let mut seen = Vec::new();
        {
            let mut debounced = debounce(|value: &str| seen.push(value.to_string()), ms(50));
            debounced.call("q", start);
            debounced.call("qu", start + ms(10));
            assert!(!debounced.poll(start + ms(20)));
            assert!(debounced.poll(start + ms(60)));
            assert!(!debounced.poll(start + ms(200)));
        }
        assert_eq!(seen, vec!["qu".to_string()]);
    }
}
