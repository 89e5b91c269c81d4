//! Property-based coverage of the bootstrap constructor across graph
//! sizes, complementing the fixed scenarios in `scenarios.rs`.

use proptest::prelude::*;
use skipgraph::{check_invariants, count_components};
use skipgraph_harness::bootstrap_graph;

proptest! {
    #[test]
    fn bootstrap_output_is_always_internally_consistent(
        count in 1_i64..200,
        seed in any::<u64>(),
    ) {
        let nodes = bootstrap_graph(count, seed);
        prop_assert_eq!(nodes.len() as i64, count);

        let report = check_invariants(&nodes).unwrap();
        prop_assert!(report.is_valid(), "violations: {:?}", report.violations);
        prop_assert_eq!(count_components(&nodes, 0).unwrap(), 1);
    }
}
