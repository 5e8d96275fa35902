use crate::domain::error::PipeError;
use std::collections::{BTreeMap, BTreeSet};

pub type NodeId = u32;

/// Adjacency mapping: node id -> neighbours as declared (duplicates and
/// self-references kept). Built once, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipeGraph {
    pub adjacency: BTreeMap<NodeId, Vec<NodeId>>,
}

impl PipeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    pub fn keys(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn neighbors(&self, node: NodeId) -> Result<&[NodeId], PipeError> {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .ok_or(PipeError::MissingNode { node })
    }
}

/// One pipe group: the node the traversal started from and every member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub seed: NodeId,
    pub members: BTreeSet<NodeId>,
}

impl Component {
    pub fn size(&self) -> usize {
        self.members.len()
    }
}
