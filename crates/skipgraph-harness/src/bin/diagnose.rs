//! Ad hoc graph exploration: build a bootstrap graph of a given size and
//! seed, then print its level-0 component count and invariant report.
//!
//! ```text
//! cargo run -p skipgraph-harness --bin diagnose -- --count 200 --seed 1
//! ```

use skipgraph::{check_invariants, count_components};
use skipgraph_harness::bootstrap_graph;

struct Args {
    count: i64,
    seed: u64,
}

fn parse_args() -> Args {
    let mut count = 100_i64;
    let mut seed = 0_u64;
    let mut args = std::env::args().skip(1);
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--count" => {
                count = args
                    .next()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(count);
            }
            "--seed" => {
                seed = args.next().and_then(|v| v.parse().ok()).unwrap_or(seed);
            }
            other => {
                tracing::warn!(flag = other, "ignoring unrecognized argument");
            }
        }
    }
    Args { count, seed }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Args { count, seed } = parse_args();
    let nodes = bootstrap_graph(count, seed);

    let components = count_components(&nodes, 0).expect("level 0 is always in range");
    let report = check_invariants(&nodes).expect("table reads do not fail on a built graph");

    println!("nodes: {}", nodes.len());
    println!("level-0 components: {components}");
    println!("invariant violations: {}", report.violations.len());
    for violation in &report.violations {
        println!("  - {}", violation.description);
    }
}
