use crate::domain::graph::{NodeId, PipeGraph};
use crate::domain::traits::SeedSelector;
use std::collections::BTreeSet;

/// Smallest key not yet seen.
pub struct FirstUnseenKey;

impl SeedSelector for FirstUnseenKey {
    fn next_seed(&self, graph: &PipeGraph, seen: &BTreeSet<NodeId>) -> Option<NodeId> {
        graph.keys().find(|k| !seen.contains(k))
    }
}

/// Starts from the given node when it is an unseen key, otherwise behaves
/// like [`FirstUnseenKey`].
pub struct PreferredSeed(pub NodeId);

impl SeedSelector for PreferredSeed {
    fn next_seed(&self, graph: &PipeGraph, seen: &BTreeSet<NodeId>) -> Option<NodeId> {
        if graph.contains(self.0) && !seen.contains(&self.0) {
            return Some(self.0);
        }
        FirstUnseenKey.next_seed(graph, seen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(keys: &[NodeId]) -> PipeGraph {
        PipeGraph {
            adjacency: keys.iter().map(|k| (*k, vec![*k])).collect(),
        }
    }

    #[test]
    fn first_unseen_key_walks_keys_in_order() {
        let g = graph(&[7, 3, 5]);
        let mut seen = BTreeSet::new();
        assert_eq!(FirstUnseenKey.next_seed(&g, &seen), Some(3));
        seen.insert(3);
        assert_eq!(FirstUnseenKey.next_seed(&g, &seen), Some(5));
        seen.extend([5, 7]);
        assert_eq!(FirstUnseenKey.next_seed(&g, &seen), None);
    }

    #[test]
    fn preferred_seed_falls_back_when_absent_or_seen() {
        let g = graph(&[1, 2]);
        let seen = BTreeSet::new();
        assert_eq!(PreferredSeed(2).next_seed(&g, &seen), Some(2));
        // Node 0 is not declared.
        assert_eq!(PreferredSeed(0).next_seed(&g, &seen), Some(1));

        let seen = BTreeSet::from([2]);
        assert_eq!(PreferredSeed(2).next_seed(&g, &seen), Some(1));
    }

    #[test]
    fn empty_graph_has_no_seed() {
        let g = PipeGraph::new();
        assert_eq!(PreferredSeed(0).next_seed(&g, &BTreeSet::new()), None);
    }
}
