//! Integration tests for logical clock behavior across insertions

use tracegen::prelude::*;

fn stamps<T>(forest: &[Tree<Timed<T>>]) -> Vec<TimePoint> {
    walker::flatten(forest).iter().map(|t| t.time).collect()
}

/// Test that consecutive stamps differ by exactly the delta
#[test]
fn test_stamps_increase_by_delta() {
    let delta = TimeSpan::from_millis(37);
    let program = set_clock_delta(delta).then(insert_timed_values(1..=10));
    let forest = run_forest(program, seeded(0));

    let times = stamps(&forest);
    assert_eq!(times.len(), 10);
    for pair in times.windows(2) {
        assert_eq!(pair[0] + delta, pair[1]);
    }
}

/// Test that an explicit set_clock resets the sequence
#[test]
fn test_set_clock_intervenes() {
    let program = insert_timed_values(vec![1, 2])
        .then(set_clock(TimePoint::from_secs(100)))
        .then(insert_timed_values(vec![3, 4]));
    let forest = run_forest(program, seeded(0));

    assert_eq!(
        stamps(&forest),
        vec![
            TimePoint::ZERO,
            TimePoint::from_secs(1),
            TimePoint::from_secs(100),
            TimePoint::from_secs(101),
        ]
    );
}

/// Test that a delta change applies from the next step onward
#[test]
fn test_delta_change_mid_program() {
    let program = insert_timed_value('a')
        .then(set_clock_delta(TimeSpan::from_millis(10)))
        .then(insert_timed_values(vec!['b', 'c']));
    let forest = run_forest(program, seeded(0));

    assert_eq!(
        stamps(&forest),
        vec![
            TimePoint::ZERO,
            TimePoint::from_secs(1),
            TimePoint::from_millis(1010),
        ]
    );
}

/// Test that random insertions are stamped like timed ones
#[test]
fn test_random_values_are_stamped() {
    let program = set_clock_delta(TimeSpan::from_millis(5))
        .then(insert_random_values::<u32, _>(3))
        .bind(|drawn| insert_timed_value(drawn.iter().copied().fold(0u32, u32::wrapping_add)));
    let forest = run_forest(program, seeded(2));

    assert_eq!(
        stamps(&forest),
        vec![
            TimePoint::ZERO,
            TimePoint::from_millis(5),
            TimePoint::from_millis(10),
            TimePoint::from_millis(15),
        ]
    );
}
