//! Integration tests for branch splicing and random-state propagation

use tracegen::prelude::*;

/// Draws `n` consecutive u64 values from a fresh seeded source.
fn reference_draws(seed: u64, n: usize) -> Vec<u64> {
    let mut rng = seeded(seed);
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let (v, next) = rng.draw::<u64>();
        out.push(v);
        rng = next;
    }
    out
}

/// Test x, branch(y), z: one root x whose children are [y, z]
#[test]
fn test_branch_is_sibling_of_continuation() {
    let program = insert_timed_value('x')
        .then(branch(insert_timed_value('y')))
        .then(insert_timed_value('z'));
    let forest = run_forest(program, seeded(0));

    assert_eq!(
        forest,
        vec![Tree::node(
            Timed::new('x', TimePoint::ZERO),
            vec![
                Tree::leaf(Timed::new('y', TimePoint::from_secs(1))),
                Tree::leaf(Timed::new('z', TimePoint::from_secs(1))),
            ],
        )]
    );
}

/// Test that a branch's subtree sits at the depth of the continuation
#[test]
fn test_branch_subtree_depth() {
    let program = insert_timed_value(1)
        .then(branch(insert_timed_values(vec![10, 11, 12])))
        .then(insert_timed_values(vec![2, 3]));
    let forest = run_forest(program, seeded(0));

    let values: Vec<Vec<i32>> = walker::paths(&forest)
        .into_iter()
        .map(|p| p.into_iter().map(|t| t.value).collect())
        .collect();
    assert_eq!(values, vec![vec![1, 10, 11, 12], vec![1, 2, 3]]);
}

/// Test that branch consumes randomness the main line does not reuse
#[test]
fn test_branch_propagates_rng() {
    let program = insert_random_value::<u64, _>()
        .zip(branch(insert_random_values::<u64, _>(3)))
        .zip(insert_random_value::<u64, _>());
    let (((before, inside), after), _) = run(program, seeded(17));

    let expected = reference_draws(17, 5);
    assert_eq!(before, expected[0]);
    assert_eq!(inside, expected[1..4].to_vec());
    assert_eq!(after, expected[4]);
    assert!(!inside.contains(&after));
}

/// Test that branch_forget_rand leaves later draws unchanged
#[test]
fn test_branch_forget_rand_reuses_snapshot() {
    let with_branch = insert_random_value::<u64, _>()
        .then(branch_forget_rand(insert_random_values::<u64, _>(3)))
        .then(insert_random_value::<u64, _>());
    let without_branch = insert_random_value::<u64, _>().then(insert_random_value::<u64, _>());

    let (after_branch, forest) = run(with_branch, seeded(17));
    let (after_plain, _) = run(without_branch, seeded(17));
    assert_eq!(after_branch, after_plain);

    // The branch drew the same value the main line draws next.
    let root = &forest[0];
    assert_eq!(root.children.len(), 2);
    assert_eq!(root.children[0].value.value, after_plain);
    assert_eq!(root.children[1].value.value, after_plain);
}

/// Test that an empty branch leaves the forest unchanged
#[test]
fn test_empty_branch_is_idempotent() {
    let with_branch = insert_timed_values(vec!['a', 'b'])
        .then(branch(set_clock_delta(TimeSpan::from_secs(9)).then(step_clock())))
        .then(insert_timed_value('c'));
    let without_branch = insert_timed_values(vec!['a', 'b']).then(insert_timed_value('c'));

    assert_eq!(
        run_forest(with_branch, seeded(3)),
        run_forest(without_branch, seeded(3))
    );
}

/// Test nested branches: a branch inside a branch forks the alternative
#[test]
fn test_nested_branches() {
    let alternative = insert_raw_value("retry")
        .then(branch(insert_raw_value("give-up")))
        .then(insert_raw_value("success"));
    let program = insert_raw_value("request")
        .then(branch(alternative))
        .then(insert_raw_value("response"));
    let forest = run_forest(program, seeded(0));

    assert_eq!(
        walker::paths(&forest),
        vec![
            vec!["request", "retry", "give-up"],
            vec!["request", "retry", "success"],
            vec!["request", "response"],
        ]
    );
}
