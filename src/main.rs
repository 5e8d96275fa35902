//! Binary entrypoint.
//!
//! Layers:
//! - domain: graph types, errors and ports
//! - infrastructure: parser, BFS engine, seed selectors, NDJSON events
//! - usecase: component counting + analysis workflow
//! - interface: CLI wiring

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    digital_plumber::interface::cli::run().await
}
