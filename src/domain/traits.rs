use crate::domain::error::PipeError;
use crate::domain::graph::{NodeId, PipeGraph};
use std::collections::BTreeSet;

pub trait ReachabilityEngine {
    /// Every node reachable from `start` by following declared pipes.
    fn reachable_from(&self, graph: &PipeGraph, start: NodeId)
        -> Result<BTreeSet<NodeId>, PipeError>;
}

pub trait SeedSelector {
    /// Next key to start a traversal from, or `None` once `seen` covers every key.
    fn next_seed(&self, graph: &PipeGraph, seen: &BTreeSet<NodeId>) -> Option<NodeId>;
}
