use crate::domain::error::PipeError;
use crate::domain::graph::{Component, NodeId, PipeGraph};
use crate::domain::traits::{ReachabilityEngine, SeedSelector};
use std::collections::BTreeSet;

/// Split the graph into pipe groups, in discovery order.
///
/// Each round asks `seeds` for a key not yet covered, traverses from it and
/// folds the result into the seen set. Stops once every key is covered.
pub fn partition_components(
    graph: &PipeGraph,
    engine: &dyn ReachabilityEngine,
    seeds: &dyn SeedSelector,
) -> Result<Vec<Component>, PipeError> {
    let mut seen: BTreeSet<NodeId> = BTreeSet::new();
    let mut components = Vec::new();

    while let Some(seed) = seeds.next_seed(graph, &seen) {
        let members = engine.reachable_from(graph, seed)?;
        // The seed counts as seen even if the engine leaves it out.
        seen.insert(seed);
        seen.extend(members.iter().copied());
        components.push(Component { seed, members });
    }

    Ok(components)
}

/// Number of pipe groups; an empty graph has none.
pub fn count_components(
    graph: &PipeGraph,
    engine: &dyn ReachabilityEngine,
    seeds: &dyn SeedSelector,
) -> Result<usize, PipeError> {
    Ok(partition_components(graph, engine, seeds)?.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::bfs_reachability::BfsReachability;
    use crate::infrastructure::pipes_text::parse_pipes;
    use crate::infrastructure::seed_selector::{FirstUnseenKey, PreferredSeed};

    const SAMPLE: &str = "0 <-> 2\n1 <-> 1\n2 <-> 0, 3, 4\n3 <-> 2, 4\n4 <-> 2, 3, 6\n5 <-> 6\n6 <-> 4, 5";

    #[test]
    fn empty_graph_has_zero_components() {
        let g = PipeGraph::new();
        assert_eq!(
            count_components(&g, &BfsReachability, &FirstUnseenKey).unwrap(),
            0
        );
    }

    #[test]
    fn sample_has_two_components_from_any_seed() {
        let g = parse_pipes(SAMPLE).expect("parse");
        for seed in 0..7 {
            let n = count_components(&g, &BfsReachability, &PreferredSeed(seed)).unwrap();
            assert_eq!(n, 2, "seed {seed}");
        }
    }

    #[test]
    fn partition_reports_seed_and_members() {
        let g = parse_pipes(SAMPLE).expect("parse");
        let parts = partition_components(&g, &BfsReachability, &PreferredSeed(1)).unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].seed, 1);
        assert_eq!(parts[0].members, BTreeSet::from([1]));
        assert_eq!(parts[1].seed, 0);
        assert_eq!(parts[1].size(), 6);
    }

    #[test]
    fn graph_without_node_zero_still_counts() {
        let g = parse_pipes("5 <-> 6\n6 <-> 5\n9 <-> 9").expect("parse");
        assert_eq!(
            count_components(&g, &BfsReachability, &PreferredSeed(0)).unwrap(),
            2
        );
    }

    #[test]
    fn missing_neighbor_propagates() {
        let g = parse_pipes("0 <-> 1\n1 <-> 0, 4").expect("parse");
        assert_eq!(
            count_components(&g, &BfsReachability, &FirstUnseenKey).unwrap_err(),
            PipeError::MissingNode { node: 4 }
        );
    }
}
