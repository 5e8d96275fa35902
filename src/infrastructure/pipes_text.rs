use crate::domain::error::PipeError;
use crate::domain::graph::{NodeId, PipeGraph};
use anyhow::Result;
use std::collections::btree_map::Entry;
use tokio::fs;

const SEPARATOR: &str = " <-> ";
const NEIGHBOR_SEPARATOR: &str = ", ";

/// Parse `<id> <-> <id>[, <id>...]` records, one per line.
pub fn parse_pipes(text: &str) -> Result<PipeGraph, PipeError> {
    let mut graph = PipeGraph::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let (source, neighbors) = parse_line(line, raw)?;

        match graph.adjacency.entry(source) {
            Entry::Vacant(slot) => {
                slot.insert(neighbors);
            }
            Entry::Occupied(_) => {
                return Err(PipeError::format(
                    line,
                    format!("node {source} is declared more than once"),
                ));
            }
        }
    }

    Ok(graph)
}

fn parse_line(line: usize, raw: &str) -> Result<(NodeId, Vec<NodeId>), PipeError> {
    let Some((source, rest)) = raw.split_once(SEPARATOR) else {
        return Err(PipeError::format(
            line,
            format!("missing `{SEPARATOR}` separator in {raw:?}"),
        ));
    };

    let source = parse_id(line, source)?;
    let neighbors = rest
        .split(NEIGHBOR_SEPARATOR)
        .map(|token| parse_id(line, token))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((source, neighbors))
}

fn parse_id(line: usize, token: &str) -> Result<NodeId, PipeError> {
    token
        .parse::<NodeId>()
        .map_err(|e| PipeError::format(line, format!("invalid node id {token:?}: {e}")))
}

pub async fn read_pipes_file(path: &str) -> Result<String> {
    let raw = fs::read_to_string(path).await?;
    Ok(raw)
}
