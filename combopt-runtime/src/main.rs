use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, Command};
use combopt_algorithms as algorithms;
use combopt_challenges as challenges;
use combopt_utils::{compress_obj, jsonify, load_json_arg};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde_json::{Map, Value};
use std::{fs, path::PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const CHALLENGES: &str = "knapsack, set_cover or max_distance";

fn cli() -> Command {
    Command::new("combopt")
        .about("Generates, solves or verifies combinatorial optimization instances")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate")
                .about("Generates a seeded random instance")
                .arg(arg!(<CHALLENGE> "knapsack, set_cover or max_distance"))
                .arg(
                    arg!(<TRACK> "Instance shape as key=value pairs, e.g. n_items=50,budget=25,decimals=1")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--seed [SEED] "Seed for the instance generator")
                        .default_value("0")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the instance will be saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("compute_solution")
                .about("Computes a solution")
                .arg(arg!(<CHALLENGE> "knapsack, set_cover or max_distance"))
                .arg(
                    arg!(<INSTANCE> "Instance json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--hyperparameters [HYPERPARAMETERS] "Hyperparameters json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the solution will be saved to this file path (default json)")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--compress [COMPRESS] "If output file is set, the solution will be compressed as zlib")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies a solution")
                .arg(arg!(<CHALLENGE> "knapsack, set_cover or max_distance"))
                .arg(
                    arg!(<INSTANCE> "Instance json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SOLUTION> "Solution json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("generate", sub_m)) => generate(
            sub_m.get_one::<String>("CHALLENGE").unwrap().clone(),
            sub_m.get_one::<String>("TRACK").unwrap().clone(),
            *sub_m.get_one::<u64>("seed").unwrap(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        Some(("compute_solution", sub_m)) => compute_solution(
            sub_m.get_one::<String>("CHALLENGE").unwrap().clone(),
            sub_m.get_one::<String>("INSTANCE").unwrap().clone(),
            sub_m.get_one::<String>("hyperparameters").cloned(),
            sub_m.get_one::<PathBuf>("output").cloned(),
            sub_m.get_flag("compress"),
        ),
        Some(("verify_solution", sub_m)) => verify_solution(
            sub_m.get_one::<String>("CHALLENGE").unwrap().clone(),
            sub_m.get_one::<String>("INSTANCE").unwrap().clone(),
            sub_m.get_one::<String>("SOLUTION").unwrap().clone(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn generate(
    challenge: String,
    track: String,
    seed: u64,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let seed: [u8; 32] = StdRng::seed_from_u64(seed).gen();

    macro_rules! dispatch {
        ($c:ident) => {{
            let track: challenges::$c::Track = track.parse()?;
            serde_json::to_value(<challenges::$c::Challenge>::generate_instance(&seed, &track)?)?
        }};
    }

    let instance = match challenge.as_str() {
        "knapsack" => dispatch!(knapsack),
        "set_cover" => dispatch!(set_cover),
        "max_distance" => dispatch!(max_distance),
        _ => return Err(anyhow!("Unsupported challenge '{}', expected {}", challenge, CHALLENGES)),
    };
    write_output(&instance, output_file, false)
}

pub fn compute_solution(
    challenge: String,
    instance: String,
    hyperparameters: Option<String>,
    output_file: Option<PathBuf>,
    compress: bool,
) -> Result<()> {
    let hyperparameters = hyperparameters
        .map(|h| load_json_arg::<Map<String, Value>>(&h))
        .transpose()?;
    debug!(%challenge, ?hyperparameters, "computing solution");

    macro_rules! dispatch {
        ($c:ident) => {{
            let instance: challenges::$c::Challenge = load_json_arg(&instance)?;
            let solution = algorithms::$c::solve_challenge(&instance, &hyperparameters)?;
            serde_json::to_value(&solution)?
        }};
    }

    let solution = match challenge.as_str() {
        "knapsack" => dispatch!(knapsack),
        "set_cover" => dispatch!(set_cover),
        "max_distance" => dispatch!(max_distance),
        _ => return Err(anyhow!("Unsupported challenge '{}', expected {}", challenge, CHALLENGES)),
    };
    write_output(&solution, output_file, compress)
}

pub fn verify_solution(challenge: String, instance: String, solution: String) -> Result<()> {
    if instance == "-" && solution == "-" {
        return Err(anyhow!("Only one of INSTANCE and SOLUTION can be read from stdin"));
    }

    macro_rules! dispatch {
        ($c:ident, $objective:literal) => {{
            let instance: challenges::$c::Challenge = load_json_arg(&instance)?;
            let solution: challenges::$c::Solution = load_json_arg(&solution)?;
            match instance.verify_solution(&solution) {
                Ok(objective) => println!("Solution is valid ({} = {})", $objective, objective),
                Err(e) => return Err(anyhow!("Invalid solution: {}", e)),
            }
        }};
    }

    match challenge.as_str() {
        "knapsack" => dispatch!(knapsack, "total_value"),
        "set_cover" => dispatch!(set_cover, "covered"),
        "max_distance" => dispatch!(max_distance, "min_distance"),
        _ => return Err(anyhow!("Unsupported challenge '{}', expected {}", challenge, CHALLENGES)),
    }
    Ok(())
}

fn write_output(value: &Value, output_file: Option<PathBuf>, compress: bool) -> Result<()> {
    match output_file {
        Some(path) => {
            let bytes = if compress {
                compress_obj(value)?
            } else {
                jsonify(value)?.into_bytes()
            };
            fs::write(&path, bytes)
                .map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;
            debug!(path = %path.display(), compress, "output saved");
        }
        None => println!("{}", jsonify(value)?),
    }
    Ok(())
}
