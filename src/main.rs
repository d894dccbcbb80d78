use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};

use simplelog::{info, error, debug, LevelFilter, TerminalMode, ColorChoice, Config, TermLogger};

use wudesim_rs::model::network::Network;

#[derive(Parser, Debug)]
#[command(
  version = "0.1.0",
  about = "Reads EPANET input files for dead-end water quality modelling"
)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Load a network and print a summary of the resolved model
  Check {
    /// Input file (EPANET .inp format)
    input_file: String,
    /// Print verbose output while loading
    #[arg(short, long)]
    verbose: bool,
    /// Suppress all output except for errors
    #[arg(long)]
    quiet: bool,
  },
  /// Load a network and save the resolved model
  Convert {
    /// Input file (EPANET .inp format)
    input_file: String,
    /// Output file (.json or .msgpack/.mpk)
    output_file: String,
  },
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  // Determine log level based on command
  let log_level = match &cli.command {
    Commands::Check { quiet, verbose, .. } => {
      if *quiet { LevelFilter::Error }
      else if *verbose { LevelFilter::Debug }
      else { LevelFilter::Info }
    }
    _ => LevelFilter::Info,
  };

  if let Err(e) = TermLogger::init(log_level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
    eprintln!("Failed to initialize logger: {}", e);
  }

  let status = match cli.command {
    Commands::Check { input_file, .. } => check_network(&input_file),
    Commands::Convert { input_file, output_file } => convert_network(&input_file, &output_file),
  };
  ExitCode::from(status)
}

/// Load a network, returning None (after logging the reason) when it is unusable
fn load(input_file: &str) -> Option<Network> {
  let start_time = Instant::now();
  info!("Loading network from file: {}", input_file);

  match Network::read_inp(input_file) {
    Ok(network) => {
      debug!("Network loaded in {:?}", start_time.elapsed());
      Some(network)
    }
    Err(e) => {
      error!("Failed to load network: {}", e);
      None
    }
  }
}

/// Load a network and log what was resolved
fn check_network(input_file: &str) -> u8 {
  let Some(network) = load(input_file) else { return 1 };

  info!("Pipes: {}, junctions: {}, tanks: {}, reservoirs: {}, pumps: {}, valves: {}",
    network.pipes.len(), network.junctions.len(), network.tanks.len(),
    network.reservoirs.len(), network.pumps.len(), network.valves.len());
  info!("Flow units {:?} ({:?} system, {} m3/s per unit)",
    network.options.flow_units, network.options.unit_system, network.options.flow_unit_conversion);
  info!("Quality: {} ({})", network.options.quality_tag, network.options.quality_unit);
  info!("Duration {} h:mm, hydraulic step {}, quality step {}, report step {} from {}, {} reporting periods",
    network.times.duration, network.times.hydraulic_step, network.times.quality_step,
    network.times.report_step, network.times.report_start, network.times.n_steps);
  info!("Bulk coefficient {:e} 1/s (order {}), wall coefficient {:e} (order {})",
    network.reactions.bulk_coeff, network.reactions.bulk_order,
    network.reactions.wall_coeff, network.reactions.wall_order);

  if network.sources.is_empty() {
    info!("No source junctions (negative demand) found");
  } else {
    info!("Source junctions: {}", network.sources.join(", "));
  }
  0
}

/// Convert a network file to JSON or MessagePack
fn convert_network(input_file: &str, output_file: &str) -> u8 {
  let Some(network) = load(input_file) else { return 1 };

  let start_time = Instant::now();
  info!("Converting to: {}", output_file);
  if let Err(e) = network.save_network(output_file) {
    error!("{}", e);
    return 1;
  }
  info!("Network saved in {:?}", start_time.elapsed());
  0
}
