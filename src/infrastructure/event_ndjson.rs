use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::GraphParsed { nodes, edges } => {
            json!({"type":"graph_parsed","nodes":nodes,"edges":edges})
        }
        AppEvent::ReachabilityComputed { start, reachable } => {
            json!({"type":"reachability_computed","start":start,"reachable":reachable})
        }
        AppEvent::ComponentFound { index, seed, size } => {
            json!({"type":"component_found","index":index,"seed":seed,"size":size})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}
