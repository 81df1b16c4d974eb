//! Command-line front-end for strops
//! This binary maps flags directly onto the core pipeline operations.
//!
//! Usage:
//!   strops run [path] --op <id> [--op <id> ...]   - Run a pipeline over a file or stdin
//!   strops list-ops [--format <format>]           - List the operation catalog

use clap::{Arg, ArgAction, Command};
use serde::Serialize;
use std::io::Read as _;
use strops::ops::{Pipeline, PipelineExecutor};

/// One row of the catalog listing
#[derive(Serialize)]
struct OperationInfo {
    id: String,
    name: String,
}

fn main() {
    let matches = Command::new("strops")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Apply an ordered pipeline of string transformations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Run a pipeline over a file (or stdin)")
                .arg(
                    Arg::new("path")
                        .help("Path to the input file; stdin when omitted")
                        .index(1),
                )
                .arg(
                    Arg::new("op")
                        .long("op")
                        .action(ArgAction::Append)
                        .help("Operation id to append to the pipeline; repeatable, applied in order"),
                ),
        )
        .subcommand(
            Command::new("list-ops")
                .about("List the operation catalog in registration order")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            let path = run_matches.get_one::<String>("path");
            let ops: Vec<String> = run_matches
                .get_many::<String>("op")
                .map(|ids| ids.cloned().collect())
                .unwrap_or_default();
            handle_run_command(path.map(String::as_str), &ops);
        }
        Some(("list-ops", list_matches)) => {
            let format = list_matches.get_one::<String>("format").unwrap();
            handle_list_ops_command(format);
        }
        _ => unreachable!(),
    }
}

/// Handle the run command
fn handle_run_command(path: Option<&str>, ops: &[String]) {
    let input = match path {
        Some(path) => std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        }),
        None => {
            let mut buffer = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading stdin: {}", e);
                std::process::exit(1);
            }
            buffer
        }
    };

    let mut pipeline = Pipeline::new();
    for id in ops {
        pipeline.append(id.as_str());
    }

    let executor = PipelineExecutor::new();
    print!("{}", executor.run(&input, &pipeline));
}

/// Handle the list-ops command
fn handle_list_ops_command(format: &str) {
    let executor = PipelineExecutor::new();
    let catalog: Vec<OperationInfo> = executor
        .registry()
        .list()
        .iter()
        .map(|op| OperationInfo {
            id: op.id().to_string(),
            name: op.name().to_string(),
        })
        .collect();

    match format {
        "text" => {
            println!("Available operations:\n");
            for info in &catalog {
                println!("  {:<22}{}", info.id, info.name);
            }
        }
        "json" => {
            let json = serde_json::to_string_pretty(&catalog).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        other => {
            eprintln!("Unknown format '{}'; expected 'text' or 'json'", other);
            std::process::exit(1);
        }
    }
}
