//! Hazard unit CLI.
//!
//! This binary exposes the hazard unit from the command line. It performs:
//! 1. **Eval:** Decide a single cycle from snapshot signals given as flags.
//! 2. **Replay:** Run a recorded JSON trace cycle by cycle and report statistics.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hazard_unit_core::Config;
use hazard_unit_core::Simulator;
use hazard_unit_core::common::{RegisterError, RegisterId};
use hazard_unit_core::core::pipeline::{
    DecodeSnapshot, ExecuteLatch, HazardUnit, MemoryLatch, PipelineSnapshot,
};
use hazard_unit_core::sim::Trace;

#[derive(Parser, Debug)]
#[command(
    name = "hzu",
    author,
    version,
    about = "Five-stage pipeline hazard unit",
    long_about = "Evaluate the hazard/control unit for one cycle or replay a recorded trace.\n\nExamples:\n  hzu eval --ex-load --ex-rd 1 --rs1 1\n  hzu eval --jump --mem-load --mem-rd 5 --rs2 5\n  hzu replay -f trace.json --config hazard.json"
)]
struct Cli {
    /// Trace every stall and flush decision (TRACE level, target `hazard`).
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decide a single cycle.
    Eval(EvalArgs),

    /// Replay a JSON trace of pipeline snapshots.
    Replay {
        /// Trace file (`{"cycles": [...]}`).
        #[arg(short, long)]
        file: PathBuf,

        /// JSON configuration file; defaults are used when omitted.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Emit per-cycle records and statistics as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct EvalArgs {
    /// Decode holds a jump/branch resolved in Decode.
    #[arg(long)]
    jump: bool,
    /// The branch in Decode resolved taken.
    #[arg(long)]
    branch_taken: bool,
    /// First source register of the Decode instruction.
    #[arg(long, default_value_t = 0)]
    rs1: u8,
    /// Second source register of the Decode instruction.
    #[arg(long, default_value_t = 0)]
    rs2: u8,
    /// ID/EX holds a load.
    #[arg(long)]
    ex_load: bool,
    /// Destination register latched in ID/EX.
    #[arg(long, default_value_t = 0)]
    ex_rd: u8,
    /// EX/MEM holds a load.
    #[arg(long)]
    mem_load: bool,
    /// Destination register latched in EX/MEM.
    #[arg(long, default_value_t = 0)]
    mem_rd: u8,
}

impl EvalArgs {
    /// Builds the snapshot, rejecting register indices outside x0-x31.
    fn snapshot(&self) -> Result<PipelineSnapshot, RegisterError> {
        let decode = DecodeSnapshot {
            branch_taken: self.branch_taken,
            is_jump: self.jump,
            rs1: RegisterId::new(self.rs1)?,
            rs2: RegisterId::new(self.rs2)?,
        };
        let execute = ExecuteLatch {
            is_load: self.ex_load,
            rd: RegisterId::new(self.ex_rd)?,
        };
        let memory = MemoryLatch {
            is_load: self.mem_load,
            rd: RegisterId::new(self.mem_rd)?,
        };
        Ok(PipelineSnapshot::new(decode, execute, memory))
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    let result = match cli.command {
        Commands::Eval(args) => cmd_eval(&args, cli.trace),
        Commands::Replay { file, config, json } => cmd_replay(&file, config, json, cli.trace),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins; `--trace` enables hazard tracing.
fn init_tracing(trace: bool) {
    let default = if trace { "warn,hazard=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Decides one cycle and prints the outcome and signals.
fn cmd_eval(args: &EvalArgs, trace: bool) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = args.snapshot()?;
    let mut config = Config::default();
    config.general.trace_hazards = trace;
    let outcome = HazardUnit::new(&config).decide(&snapshot);
    println!("{outcome}");
    println!("{}", outcome.signals());
    Ok(())
}

/// Replays a trace file and prints per-cycle decisions and statistics.
fn cmd_replay(
    file: &Path,
    config: Option<PathBuf>,
    json: bool,
    trace: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.general.trace_hazards |= trace;

    let recorded = Trace::load(file)?;
    let mut sim = Simulator::new(&config);
    let records = sim.run(&recorded)?;

    if json {
        let doc = serde_json::json!({
            "cycles": records,
            "stats": sim.stats,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        for r in &records {
            println!("{:>6}  {:<28} {}", r.cycle, r.outcome.to_string(), r.signals);
        }
        sim.stats.print();
    }
    Ok(())
}
