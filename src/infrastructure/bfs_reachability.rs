use crate::domain::error::PipeError;
use crate::domain::graph::{NodeId, PipeGraph};
use crate::domain::traits::ReachabilityEngine;
use std::collections::{BTreeSet, VecDeque};

pub struct BfsReachability;

impl ReachabilityEngine for BfsReachability {
    fn reachable_from(
        &self,
        graph: &PipeGraph,
        start: NodeId,
    ) -> Result<BTreeSet<NodeId>, PipeError> {
        bfs(graph, start)
    }
}

fn bfs(graph: &PipeGraph, start: NodeId) -> Result<BTreeSet<NodeId>, PipeError> {
    let mut visited: BTreeSet<NodeId> = BTreeSet::new();
    let mut frontier: VecDeque<NodeId> = VecDeque::new();
    frontier.push_back(start);

    while let Some(n) = frontier.pop_front() {
        // Duplicates and cycles are filtered here rather than on push.
        if !visited.insert(n) {
            continue;
        }
        frontier.extend(graph.neighbors(n)?.iter().copied());
    }

    Ok(visited)
}
