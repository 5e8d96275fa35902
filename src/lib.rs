//! Pipe graph analysis: parse `<id> <-> <id>, ...` adjacency lists, find
//! everything reachable from a node and count the disjoint pipe groups.

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
