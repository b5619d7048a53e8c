//! Property-based tests for random-source propagation through branches

use super::support::{build, observe, ops_strategy};
use proptest::prelude::*;
use tracegen::prelude::*;

fn draws(seed: u64, n: usize) -> Vec<u64> {
    let mut rng = seeded(seed);
    (0..n)
        .map(|_| {
            let (v, next) = rng.clone().draw::<u64>();
            rng = next;
            v
        })
        .collect()
}

proptest! {
    #[test]
    fn test_branch_advances_main_line_source(n in 0usize..6, seed in any::<u64>()) {
        let program = branch(insert_random_values::<u64, _>(n))
            .zip(insert_random_value::<u64, _>());
        let ((inside, after), _) = run(program, seeded(seed));

        let expected = draws(seed, n + 1);
        prop_assert_eq!(&inside[..], &expected[..n]);
        prop_assert_eq!(after, expected[n]);
    }

    #[test]
    fn test_forget_rand_replays_pre_branch_source(n in 0usize..6, seed in any::<u64>()) {
        let program = branch_forget_rand(insert_random_values::<u64, _>(n))
            .zip(insert_random_value::<u64, _>());
        let ((_, after), _) = run(program, seeded(seed));

        prop_assert_eq!(after, draws(seed, 1)[0]);
    }

    #[test]
    fn test_forget_rand_leaves_final_state_as_without_branch(
        before in ops_strategy(),
        inside in ops_strategy(),
        after in ops_strategy(),
        seed in any::<u64>(),
    ) {
        let with_branch = build(&before)
            .then(branch_forget_rand(build(&inside)))
            .then(build(&after));
        let without_branch = build(&before).then(build(&after));

        let (v1, _, s1) = observe(with_branch, seed);
        let (v2, _, s2) = observe(without_branch, seed);
        prop_assert_eq!(v1, v2);
        prop_assert_eq!(s1, s2);
    }
}
