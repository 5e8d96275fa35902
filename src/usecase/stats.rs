use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlumbStats {
    pub nodes: usize,
    pub edges: usize,
    pub reachable: usize,
    pub components: usize,
    pub largest_component: usize,
}
