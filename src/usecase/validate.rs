use crate::domain::graph::PipeGraph;
use anyhow::{anyhow, Result};
use std::collections::BTreeSet;

/// Every neighbour must be declared, and every pipe must be listed on both ends.
pub fn validate_pipes(graph: &PipeGraph) -> Result<()> {
    let mut violations: Vec<String> = Vec::new();

    for (&node, neighbors) in graph.adjacency.iter() {
        // Report each distinct neighbour once.
        let distinct: BTreeSet<_> = neighbors.iter().copied().collect();
        for other in distinct {
            match graph.adjacency.get(&other) {
                None => violations.push(format!(
                    "node {node} lists {other}, which is never declared"
                )),
                Some(back) if !back.contains(&node) => violations.push(format!(
                    "pipe {node} <-> {other} is only declared on node {node}"
                )),
                Some(_) => {}
            }
        }
    }

    if violations.is_empty() {
        return Ok(());
    }

    Err(anyhow!(
        "pipe graph validation failed:\n{}",
        violations.join("\n")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::pipes_text::parse_pipes;

    #[test]
    fn validate_accepts_symmetric_graph_with_self_loop() {
        let g = parse_pipes("0 <-> 2\n1 <-> 1\n2 <-> 0, 3, 4\n3 <-> 2, 4\n4 <-> 2, 3, 6\n5 <-> 6\n6 <-> 4, 5")
            .expect("parse");
        validate_pipes(&g).expect("valid");
    }

    #[test]
    fn validate_accepts_empty_graph() {
        validate_pipes(&PipeGraph::new()).expect("valid");
    }

    #[test]
    fn validate_reports_undeclared_neighbor() {
        let g = parse_pipes("0 <-> 0, 8").expect("parse");
        let err = validate_pipes(&g).unwrap_err().to_string();
        assert!(err.contains("lists 8, which is never declared"));
    }

    #[test]
    fn validate_reports_one_sided_pipe_once() {
        let g = parse_pipes("0 <-> 1, 1\n1 <-> 1").expect("parse");
        let err = validate_pipes(&g).unwrap_err().to_string();
        assert_eq!(err.matches("only declared on node 0").count(), 1);
    }

    #[test]
    fn validate_lists_every_violation() {
        let g = parse_pipes("0 <-> 1\n1 <-> 2\n2 <-> 2, 7").expect("parse");
        let err = validate_pipes(&g).unwrap_err().to_string();
        assert!(err.contains("pipe 0 <-> 1"));
        assert!(err.contains("pipe 1 <-> 2"));
        assert!(err.contains("lists 7"));
    }
}
