use campuslife_core::search::debounce::DebounceState;
use campuslife_core::{debounce, sanitize_search_term, Debouncer, MAX_SEARCH_TERM_CHARS};
use std::time::{Duration, Instant};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn burst_collapses_into_one_fire_with_last_args() {
    let t = Instant::now();
    let mut fired = Vec::new();
    let mut debounced = debounce(|value: u32| fired.push(value), ms(300));

    debounced.call(1, t);
    debounced.call(2, t + ms(50));
    debounced.call(3, t + ms(100));

    assert!(!debounced.poll(t + ms(300)));
    assert!(!debounced.poll(t + ms(380)));
    assert!(debounced.poll(t + ms(400)));
    assert!(!debounced.poll(t + ms(1000)));
    drop(debounced);

    assert_eq!(fired, vec![3]);
}

#[test]
fn state_machine_transitions() {
    let t = Instant::now();
    let mut debouncer = Debouncer::new(ms(300));
    assert_eq!(debouncer.state(), &DebounceState::Idle);

    debouncer.call("a", t);
    assert_eq!(
        debouncer.state(),
        &DebounceState::Pending {
            args: "a",
            deadline: t + ms(300)
        }
    );

    debouncer.call("b", t + ms(100));
    assert_eq!(debouncer.deadline(), Some(t + ms(400)));

    assert_eq!(debouncer.poll(t + ms(400)), Some("b"));
    assert_eq!(debouncer.state(), &DebounceState::Idle);
}

#[test]
fn sanitize_normalizes_whitespace() {
    assert_eq!(sanitize_search_term("  a   b  "), "a b");
}

#[test]
fn sanitize_truncates_to_limit() {
    let sanitized = sanitize_search_term("q".repeat(500));
    assert_eq!(sanitized.chars().count(), MAX_SEARCH_TERM_CHARS);
    assert_eq!(MAX_SEARCH_TERM_CHARS, 120);
}
