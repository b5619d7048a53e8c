//! Property-based tests for the sequencing laws of `Gen`

use super::support::{build, observe, ops_strategy, Op, Program};
use proptest::prelude::*;
use tracegen::prelude::*;

/// A continuation that depends on its input: inserts it, then runs `ops`.
fn continuation(ops: Vec<Op>) -> impl Fn(u8) -> Program + Clone + 'static {
    move |x| {
        insert_timed_value(x)
            .then(build(&ops))
            .map(move |v| v.wrapping_add(x))
    }
}

proptest! {
    #[test]
    fn test_left_identity(x in any::<u8>(), ops in ops_strategy(), seed in any::<u64>()) {
        let k = continuation(ops);
        let lhs = Gen::pure(x).bind(k.clone());
        let rhs = k(x);
        prop_assert_eq!(observe(lhs, seed), observe(rhs, seed));
    }

    #[test]
    fn test_right_identity(ops in ops_strategy(), seed in any::<u64>()) {
        let lhs = build(&ops).bind(Gen::pure);
        let rhs = build(&ops);
        prop_assert_eq!(observe(lhs, seed), observe(rhs, seed));
    }

    #[test]
    fn test_associativity(
        m_ops in ops_strategy(),
        g_ops in ops_strategy(),
        h_ops in ops_strategy(),
        seed in any::<u64>(),
    ) {
        let g = continuation(g_ops);
        let h = continuation(h_ops);
        let lhs = build(&m_ops).bind(g.clone()).bind(h.clone());
        let rhs = build(&m_ops).bind(move |x| g(x).bind(h));
        prop_assert_eq!(observe(lhs, seed), observe(rhs, seed));
    }

    #[test]
    fn test_map_is_bind_then_pure(ops in ops_strategy(), seed in any::<u64>()) {
        let f = |x: u8| x.wrapping_mul(3) ^ 0x5a;
        let lhs = build(&ops).map(f);
        let rhs = build(&ops).bind(move |x| Gen::pure(f(x)));
        prop_assert_eq!(observe(lhs, seed), observe(rhs, seed));
    }

    #[test]
    fn test_apply_matches_bind(f_ops in ops_strategy(), a_ops in ops_strategy(), seed in any::<u64>()) {
        let lhs = build(&f_ops)
            .map(|x| move |y: u8| x.wrapping_sub(y))
            .apply(build(&a_ops));
        let a_ops_for_rhs = a_ops.clone();
        let rhs = build(&f_ops)
            .bind(move |x| build(&a_ops_for_rhs).map(move |y| x.wrapping_sub(y)));
        prop_assert_eq!(observe(lhs, seed), observe(rhs, seed));
    }
}
