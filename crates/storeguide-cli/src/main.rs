//! Shopping guide CLI.
//!
//! Provides the `storeguide` binary with subcommands for working with
//! the store offline: `route` plans a route for a comma-separated item
//! list and prints it as JSON, `chat` runs the dialogue state machine as
//! an interactive text conversation, and `zones` lists the catalog.
//!
//! Everything runs without a language-model provider: extraction uses
//! the catalog keyword scan and sequencing is deterministic, the same
//! fallbacks the HTTP server uses when unconfigured.

use std::io::{self, BufRead, Write};
use std::process;

use clap::{Parser, Subcommand};

use storeguide_core::{layout, Route, StoreGraph, ZoneCatalog};
use storeguide_plan::plan_route;
use storeguide_session::{interpret, Session, SideEffect};

/// Supermarket shopping guide tools.
#[derive(Parser)]
#[command(name = "storeguide", about = "Supermarket shopping guide tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Plan a route for a list of items and print it as JSON.
    Route {
        /// Comma-separated item list, e.g. "milk, bread".
        #[arg(short, long)]
        items: String,
    },

    /// Run an interactive text-mode shopping conversation.
    Chat,

    /// List the catalog keywords and their zones.
    Zones,
}

fn main() {
    let cli = Cli::parse();
    let graph = layout::standard();
    let catalog = layout::standard_catalog();

    let exit_code = match cli.command {
        Commands::Route { items } => run_route(&graph, &catalog, &items),
        Commands::Chat => run_chat(&graph, &catalog),
        Commands::Zones => run_zones(&graph, &catalog),
    };
    process::exit(exit_code);
}

/// Execute the route subcommand. Exit code 0 = success, 1 = bad input.
fn run_route(graph: &StoreGraph, catalog: &ZoneCatalog, items: &str) -> i32 {
    let items: Vec<String> = items
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    match plan_route(graph, catalog, &items, None) {
        Ok(route) => {
            println!("{}", route_json(&route));
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn route_json(route: &Route) -> String {
    let value = serde_json::json!({
        "route": route.path.iter().map(|p| serde_json::json!({
            "x": p.x,
            "y": p.y,
            "zone": p.label,
        })).collect::<Vec<_>>(),
        "stops": route.stops.iter().filter_map(|&id| {
            route.zone_name(id).map(|name| format!("{}.{}", id, name))
        }).collect::<Vec<_>>(),
        "itemMapping": route.item_zones.iter().map(|iz| serde_json::json!({
            "item": iz.item,
            "zone": iz.zone_label(),
        })).collect::<Vec<_>>(),
    });
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

/// Execute the chat subcommand: a blocking read-eval-speak loop over
/// stdin, performing each side effect the session defers.
fn run_chat(graph: &StoreGraph, catalog: &ZoneCatalog) -> i32 {
    let mut session = Session::new();

    println!("Welcome to the store. Tell me what products you need.");
    println!("(Commands: yes / remove <item> / calculate route / start navigation / next zone / repeat / thank you. Ctrl-D quits.)");

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return 1;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return 0,
            Ok(_) => {}
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let turn = session.handle_command(line);
        for spoken in &turn.speech {
            println!("{}", spoken);
        }

        let followup = match turn.effect {
            None => continue,
            Some(SideEffect::CameraOn) => {
                println!("[camera on]");
                continue;
            }
            Some(SideEffect::CameraOff) => {
                println!("[camera off]");
                continue;
            }
            Some(SideEffect::Extract { utterance }) => {
                let interpretation = interpret::offline(catalog, &utterance);
                session.apply_interpretation(&utterance, &interpretation)
            }
            Some(SideEffect::ComputeRoute { items }) => {
                match plan_route(graph, catalog, &items, None) {
                    Ok(route) => session.install_route(route),
                    Err(_) => session.route_failed(),
                }
            }
        };
        for spoken in &followup.speech {
            println!("{}", spoken);
        }
    }
}

/// Execute the zones subcommand.
fn run_zones(graph: &StoreGraph, catalog: &ZoneCatalog) -> i32 {
    for (keyword, zone) in catalog.iter() {
        match graph.node(zone) {
            Ok(node) => println!("{:<16} -> {}.{}", keyword, zone, node.name),
            Err(_) => println!("{:<16} -> {}", keyword, zone),
        }
    }
    println!("{} keywords", catalog.len());
    0
}
