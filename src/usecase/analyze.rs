use crate::domain::graph::{Component, NodeId};
use crate::domain::traits::{ReachabilityEngine, SeedSelector};
use crate::infrastructure::pipes_text::parse_pipes;
use crate::usecase::components::partition_components;
use crate::usecase::event::AppEvent;
use crate::usecase::stats::PlumbStats;
use anyhow::{Context, Result};
use tokio::sync::mpsc;

/// Answers to both pipe queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlumbReport {
    pub start: NodeId,
    pub reachable: usize,
    pub components: Vec<Component>,
}

impl PlumbReport {
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}

pub async fn analyze_pipes(
    text: &str,
    engine: &dyn ReachabilityEngine,
    seeds: &dyn SeedSelector,
    start: NodeId,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<(PlumbReport, PlumbStats)> {
    let mut stats = PlumbStats::default();

    emit(&sink, AppEvent::PhaseStarted { name: "parse".into() }).await;
    let graph = parse_pipes(text).context("parsing pipes")?;
    stats.nodes = graph.node_count();
    stats.edges = graph.edge_count();
    emit(
        &sink,
        AppEvent::GraphParsed {
            nodes: stats.nodes,
            edges: stats.edges,
        },
    )
    .await;
    emit(&sink, AppEvent::PhaseFinished { name: "parse".into() }).await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "reachability".into(),
        },
    )
    .await;
    let reachable = engine
        .reachable_from(&graph, start)
        .with_context(|| format!("walking pipes from node {start}"))?;
    stats.reachable = reachable.len();
    emit(
        &sink,
        AppEvent::ReachabilityComputed {
            start,
            reachable: stats.reachable,
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "reachability".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "components".into(),
        },
    )
    .await;
    let components =
        partition_components(&graph, engine, seeds).context("counting pipe groups")?;
    for (index, comp) in components.iter().enumerate() {
        emit(
            &sink,
            AppEvent::ComponentFound {
                index,
                seed: comp.seed,
                size: comp.size(),
            },
        )
        .await;
    }
    stats.components = components.len();
    stats.largest_component = components.iter().map(Component::size).max().unwrap_or(0);
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "components".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;

    let report = PlumbReport {
        start,
        reachable: stats.reachable,
        components,
    };
    Ok((report, stats))
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
