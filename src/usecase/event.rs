use crate::domain::graph::NodeId;
use crate::usecase::stats::PlumbStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    GraphParsed {
        nodes: usize,
        edges: usize,
    },

    ReachabilityComputed {
        start: NodeId,
        reachable: usize,
    },

    ComponentFound {
        index: usize,
        seed: NodeId,
        size: usize,
    },

    Finished {
        stats: PlumbStats,
    },
}
