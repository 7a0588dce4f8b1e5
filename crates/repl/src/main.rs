//! REPL to plan deliveries on a road network
mod cli;
mod delivery_log;

use anyhow::Context as _;
use delivery_log::{CsvDeliveryLog, Delivery, DeliverySink};
use log::{info, warn};
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use route_core::prelude::*;

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Graph has {} locations and {} roads",
        context.graph.num_locations(),
        context.graph.num_roads()
    )))
}

fn list_locations(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Available Locations: {}",
        context.graph.locations().collect::<Vec<_>>().join(", ")
    )))
}

fn run_route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let start = arg(&args, "start");
    let end = arg(&args, "end");

    Ok(Some(context.plan(start, end)))
}

fn add_road(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let u = arg(&args, "u");
    let v = arg(&args, "v");
    let weight = args.get_one::<f64>("weight").copied().unwrap_or_default();

    match context.graph.add_road(u, v, weight) {
        Ok(_) => Ok(Some(format!("Added road {} <=> {} ({} minutes)", u, v, weight))),
        Err(e) => Ok(Some(format!("Error: {}", e))),
    }
}

fn arg<'a>(args: &'a ArgMatches, name: &str) -> &'a str {
    args.get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default()
}

struct Context {
    graph: RoadGraph,
    sink: Box<dyn DeliverySink>,
}

impl Context {
    fn new(graph: RoadGraph, sink: Box<dyn DeliverySink>) -> Self {
        Self { graph, sink }
    }

    /// Plans the route and hands it to the sink. A failing sink does not fail
    /// the route.
    fn plan(&mut self, start: &str, end: &str) -> String {
        match find_shortest_path(&self.graph, start, end) {
            Ok(route) => {
                if let Err(e) = self.sink.record(&Delivery::new(&route)) {
                    warn!("Could not record delivery: {:#}", e);
                }
                format!(
                    "Optimal Route: {}\nTotal Estimated Time: {} minutes",
                    route, route.total_cost
                )
            }
            Err(e) => format!("Error: {}", e),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cfg = cli::parse();

    // Init Graph
    let graph = match &cfg.roads {
        Some(path) => RoadGraph::from_csv(path)
            .with_context(|| format!("Could not load roads from {:?}", path))?,
        None => city_map(),
    };
    let delivery_log = CsvDeliveryLog::new(&cfg.log_file);
    info!(
        "Loaded {} locations, logging deliveries to {:?}",
        graph.num_locations(),
        delivery_log.path()
    );

    let context = Context::new(graph, Box::new(delivery_log));

    let mut repl = Repl::new(context)
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Plan delivery routes on a road network")
        .with_banner("Welcome to Pathfinder")
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("locations").about("List all known locations"),
            list_locations,
        )
        .with_command(
            Command::new("route")
                .arg(
                    Arg::new("start")
                        .required(true)
                        .help("Pickup location"),
                )
                .arg(
                    Arg::new("end")
                        .required(true)
                        .help("Delivery destination"),
                )
                .about("Calculate the fastest route using Dijkstra's algorithm"),
            run_route,
        )
        .with_command(
            Command::new("road")
                .arg(Arg::new("u").required(true).help("First location"))
                .arg(Arg::new("v").required(true).help("Second location"))
                .arg(
                    Arg::new("weight")
                        .value_parser(value_parser!(f64))
                        .required(true)
                        .help("Travel time in minutes"),
                )
                .about("Add a road in both directions"),
            add_road,
        );

    repl.run().map_err(|e| anyhow::anyhow!("{}", e))
}
