use crate::domain::graph::{Component, NodeId};
use crate::infrastructure::bfs_reachability::BfsReachability;
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::pipes_text::{parse_pipes, read_pipes_file};
use crate::infrastructure::seed_selector::PreferredSeed;
use crate::usecase::analyze::{analyze_pipes, PlumbReport};
use crate::usecase::components::partition_components;
use crate::usecase::event::AppEvent;
use crate::usecase::validate::validate_pipes;
use anyhow::{anyhow, Context, Result};
use std::env;
use tokio::sync::mpsc;

const DEFAULT_INPUT: &str = "pipes.txt";
const DEFAULT_START: NodeId = 0;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::PipesCount {
            input,
            start,
            emit_events,
        } => {
            let (tx, rx) = mpsc::channel::<AppEvent>(1024);
            let printer = if emit_events {
                Some(spawn_ndjson_printer(rx))
            } else {
                drop(rx);
                None
            };

            let text = read_pipes_file(&input)
                .await
                .with_context(|| format!("reading pipes file: {input}"))?;

            let engine = BfsReachability;
            let seeds = PreferredSeed(start);

            let (report, stats) = analyze_pipes(&text, &engine, &seeds, start, Some(tx))
                .await
                .with_context(|| format!("analyzing pipes: {input}"))?;

            if let Some(handle) = printer {
                handle.await.ok();
            }

            println!("{}", render_count(&report));

            eprintln!(
                "summary: nodes={} edges={} reachable={} components={} largest_component={}",
                stats.nodes,
                stats.edges,
                stats.reachable,
                stats.components,
                stats.largest_component
            );

            Ok(())
        }

        Cli::PipesComponents { input } => {
            let text = read_pipes_file(&input)
                .await
                .with_context(|| format!("reading pipes file: {input}"))?;
            let graph = parse_pipes(&text).with_context(|| format!("parsing pipes: {input}"))?;

            let components =
                partition_components(&graph, &BfsReachability, &PreferredSeed(DEFAULT_START))
                    .with_context(|| format!("counting pipe groups: {input}"))?;

            for comp in components.iter() {
                println!("{}", render_component(comp));
            }
            Ok(())
        }

        Cli::PipesValidate { input } => {
            let text = read_pipes_file(&input)
                .await
                .with_context(|| format!("reading pipes file: {input}"))?;
            let graph = parse_pipes(&text).with_context(|| format!("parsing pipes: {input}"))?;

            validate_pipes(&graph).with_context(|| format!("validating pipes: {input}"))?;

            eprintln!("ok: pipes validated");
            Ok(())
        }
    }
}

fn render_count(report: &PlumbReport) -> String {
    format!(
        "part 1: {}\npart 2: {}",
        report.reachable,
        report.component_count()
    )
}

fn render_component(comp: &Component) -> String {
    let members: Vec<String> = comp.members.iter().map(|n| n.to_string()).collect();
    format!("{}: {} [{}]", comp.seed, comp.size(), members.join(", "))
}

#[derive(Debug, PartialEq, Eq)]
enum Cli {
    PipesCount {
        input: String,
        start: NodeId,
        emit_events: bool,
    },
    PipesComponents {
        input: String,
    },
    PipesValidate {
        input: String,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin>                                   (count on ./pipes.txt from node 0)
        // <bin> pipes count [--in/--input <file>] [--start <id>] [--emit-events]
        // <bin> pipes components [--in/--input <file>]
        // <bin> pipes validate [--in/--input <file>]
        if args.len() <= 1 {
            return Ok(Cli::PipesCount {
                input: DEFAULT_INPUT.to_string(),
                start: DEFAULT_START,
                emit_events: false,
            });
        }

        if args[1] != "pipes" || args.len() < 3 {
            return Err(anyhow!(usage()));
        }

        match args[2].as_str() {
            "count" => Self::parse_count(args),
            "components" => Ok(Cli::PipesComponents {
                input: Self::parse_input_only(args)?,
            }),
            "validate" => Ok(Cli::PipesValidate {
                input: Self::parse_input_only(args)?,
            }),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_count(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut start: Option<String> = None;
        let mut emit_events = false;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                    if input.is_none() {
                        return Err(anyhow!(format!("missing value for --in/--input\n\n{}", usage())));
                    }
                }
                "--start" => {
                    i += 1;
                    start = args.get(i).cloned();
                    if start.is_none() {
                        return Err(anyhow!(format!("missing value for --start\n\n{}", usage())));
                    }
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let start = match start {
            Some(raw) => raw
                .parse::<NodeId>()
                .map_err(|e| anyhow!(format!("invalid --start {raw:?}: {e}\n\n{}", usage())))?,
            None => DEFAULT_START,
        };

        Ok(Cli::PipesCount {
            input: input.unwrap_or_else(|| DEFAULT_INPUT.to_string()),
            start,
            emit_events,
        })
    }

    fn parse_input_only(args: &[String]) -> Result<String> {
        let mut input: Option<String> = None;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                    if input.is_none() {
                        return Err(anyhow!(format!("missing value for --in/--input\n\n{}", usage())));
                    }
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        Ok(input.unwrap_or_else(|| DEFAULT_INPUT.to_string()))
    }
}

fn usage() -> &'static str {
    "Usage:\n  digital-plumber\n  pipes count [--in/--input <pipes.txt>] [--start <id>] [--emit-events]\n  pipes components [--in/--input <pipes.txt>]\n  pipes validate [--in/--input <pipes.txt>]\n\nWithout arguments, counts ./pipes.txt starting from node 0.\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout before the answers; summary goes to stderr."
}
