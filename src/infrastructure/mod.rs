// Infrastructure layer: adapters, file I/O, traversal, eventing
pub mod bfs_reachability;
pub mod event_ndjson;
pub mod pipes_text;
pub mod seed_selector;
