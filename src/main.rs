//! A command line interface to the SmartRoute routing core.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use serde_json::json;
use tracing::{error, info};

use smart_route::config::Config;
use smart_route::data;
use smart_route::logging;
use smart_route::models::{Algorithm, DisruptionKind, Severity};
use smart_route::session::Session;
use smart_route::Result;

const ALGORITHM_ARG_NAME: &str = "algorithm";
const POINTS_ARG_NAME: &str = "points";
const SAMPLE_IMPORT_ARG_NAME: &str = "sample-import";
const DISRUPTIONS_ARG_NAME: &str = "disruptions";
const CONFIG_ARG_NAME: &str = "config";
const SEED_ARG_NAME: &str = "seed";
const EXPORT_ARG_NAME: &str = "export";
const LATENCY_ARG_NAME: &str = "simulate-latency";
const VERBOSE_ARG_NAME: &str = "verbose";

const DISRUPTION_KINDS: [DisruptionKind; 3] =
    [DisruptionKind::Traffic, DisruptionKind::Weather, DisruptionKind::RoadClosure];
const SEVERITIES: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

fn get_app() -> Command {
    Command::new("smart-route")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Optimizes delivery routes for the SmartRoute demo fleet")
        .arg(
            Arg::new(ALGORITHM_ARG_NAME)
                .help("Variant to run: dijkstra, astar, genetic, ml_adaptive, or all")
                .short('a')
                .long(ALGORITHM_ARG_NAME)
                .default_value("all"),
        )
        .arg(
            Arg::new(POINTS_ARG_NAME)
                .help("Reads delivery points from a JSON export file")
                .short('p')
                .long(POINTS_ARG_NAME)
                .value_parser(value_parser!(PathBuf))
                .conflicts_with(SAMPLE_IMPORT_ARG_NAME),
        )
        .arg(
            Arg::new(SAMPLE_IMPORT_ARG_NAME)
                .help("Uses the fixed five-point import sample instead of random demo points")
                .long(SAMPLE_IMPORT_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(DISRUPTIONS_ARG_NAME)
                .help("Number of random disruptions to add before optimizing")
                .short('d')
                .long(DISRUPTIONS_ARG_NAME)
                .value_parser(value_parser!(usize))
                .default_value("0"),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to a JSON config file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Seeds the random number generator")
                .short('s')
                .long(SEED_ARG_NAME)
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new(EXPORT_ARG_NAME)
                .help("Writes the delivery points to <DIR>/delivery-points.json")
                .short('e')
                .long(EXPORT_ARG_NAME)
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new(LATENCY_ARG_NAME)
                .help("Keeps the configured processing delay before each run")
                .long(LATENCY_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(VERBOSE_ARG_NAME)
                .help("Increases log verbosity (-v debug, -vv trace)")
                .short('v')
                .long(VERBOSE_ARG_NAME)
                .action(ArgAction::Count),
        )
}

fn get_config(matches: &ArgMatches) -> Result<Config> {
    let mut config = match matches.get_one::<PathBuf>(CONFIG_ARG_NAME) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(seed) = matches.get_one::<u64>(SEED_ARG_NAME) {
        config = config.with_seed(*seed);
    }
    if !matches.get_flag(LATENCY_ARG_NAME) {
        config = config.without_latency();
    }
    Ok(config)
}

fn get_algorithms(matches: &ArgMatches) -> Result<Vec<Algorithm>> {
    match matches.get_one::<String>(ALGORITHM_ARG_NAME).map(String::as_str) {
        None | Some("all") => Ok(Algorithm::ALL.to_vec()),
        Some(name) => Ok(vec![name.parse()?]),
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = get_config(matches)?;
    let algorithms = get_algorithms(matches)?;
    let mut session = Session::new(config);

    if let Some(path) = matches.get_one::<PathBuf>(POINTS_ARG_NAME) {
        session.import_points(data::read_points(path)?);
    } else if matches.get_flag(SAMPLE_IMPORT_ARG_NAME) {
        session.import_points(data::bulk_import_sample());
    } else {
        session.load_sample_points();
    }

    let disruptions = matches.get_one::<usize>(DISRUPTIONS_ARG_NAME).copied().unwrap_or(0);
    for index in 0..disruptions {
        let kind = DISRUPTION_KINDS[index % DISRUPTION_KINDS.len()];
        let severity = SEVERITIES[index % SEVERITIES.len()];
        session.add_disruption(kind, severity, 30);
    }

    let mut results = Vec::with_capacity(algorithms.len());
    for algorithm in algorithms {
        if let Some(result) = session.optimize(algorithm) {
            results.push(result.clone());
        }
    }
    info!(runs = results.len(), "all runs finished");

    let output = json!({
        "points": session.state().points(),
        "disruptions": session.state().disruptions(),
        "results": results,
        "vehicles": session.state().vehicles(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    if let Some(dir) = matches.get_one::<PathBuf>(EXPORT_ARG_NAME) {
        data::write_export(session.state().points(), dir)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let matches = get_app().get_matches();
    logging::init(matches.get_count(VERBOSE_ARG_NAME));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "smart-route failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
