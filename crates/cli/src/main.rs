//! SH-2 style pipeline simulator CLI.
//!
//! This binary is the external agent around the execution core. It performs:
//! 1. **Run:** Load a program image, release hold, run until `SLEEP`, the cycle
//!    limit, or an explicit cycle count, then dump memory.
//! 2. **Disassemble:** Print the instructions of a program image.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde_json::{Map, Value, json};
use tracing::error;
use tracing_subscriber::EnvFilter;

use shpipe_core::common::{Result, SimError};
use shpipe_core::config::Config;
use shpipe_core::isa::abi::reg_name;
use shpipe_core::isa::disasm::disassemble;
use shpipe_core::sim::RunOutcome;
use shpipe_core::sim::loader::load_image_file;
use shpipe_core::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "shpipe",
    author,
    version,
    about = "SH-2 style two-stage pipeline simulator",
    long_about = "Load a program image, run the execution core, and dump memory.\n\nExamples:\n  shpipe run program.txt\n  shpipe run program.txt --cycles 40 --dump result.txt --regs\n  shpipe disasm program.txt"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program image and dump memory.
    Run {
        /// Program image (one 16-bit word per line).
        image: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the memory dump to this file instead of stdout.
        #[arg(short, long)]
        dump: Option<PathBuf>,

        /// Run exactly this many cycles, then assert hold.
        #[arg(long)]
        cycles: Option<u64>,

        /// Print the final registers as JSON.
        #[arg(long)]
        regs: bool,

        /// Print performance statistics.
        #[arg(long)]
        stats: bool,

        /// Log every cycle.
        #[arg(long)]
        trace: bool,
    },

    /// Disassemble a program image.
    Disasm {
        /// Program image (one 16-bit word per line).
        image: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let trace = matches!(cli.command, Commands::Run { trace: true, .. });
    init_tracing(trace);

    let result = match cli.command {
        Commands::Run {
            image,
            config,
            dump,
            cycles,
            regs,
            stats,
            trace,
        } => cmd_run(RunArgs {
            image,
            config,
            dump,
            cycles,
            regs,
            stats,
            trace,
        }),
        Commands::Disasm { image } => cmd_disasm(&image),
    };

    if let Err(e) = result {
        error!("{e}");
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Installs the log subscriber; `RUST_LOG` wins unless `--trace` is given.
fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

struct RunArgs {
    image: PathBuf,
    config: Option<PathBuf>,
    dump: Option<PathBuf>,
    cycles: Option<u64>,
    regs: bool,
    stats: bool,
    trace: bool,
}

/// Loads the image, runs the core, and reports the results.
fn cmd_run(args: RunArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.general.trace |= args.trace;

    let mut sim = Simulator::new(&config)?;
    sim.load_image(&args.image)?;

    let outcome = match args.cycles {
        Some(n) => sim.run_cycles(n),
        None => sim.run(),
    };
    match outcome {
        RunOutcome::Halted { cycles } => eprintln!("[*] halted after {cycles} cycles"),
        RunOutcome::CycleLimit { cycles } => eprintln!("[*] stopped after {cycles} cycles"),
    }

    let dump = sim.dump()?;
    match &args.dump {
        Some(path) => fs::write(path, dump).map_err(|source| {
            SimError::Io {
                path: path.clone(),
                source,
            }
        })?,
        None => print!("{dump}"),
    }

    if args.regs {
        let mut regs = Map::new();
        for (idx, value) in sim.cpu.regs.snapshot().iter().enumerate() {
            let _ = regs.insert(reg_name(idx).to_string(), json!(format!("{value:#010x}")));
        }
        let _ = regs.insert("SR".into(), json!(format!("{:#010x}", sim.cpu.sr.raw())));
        if let Some(pc) = sim.stop_pc() {
            let _ = regs.insert("PC".into(), json!(format!("{pc:#010x}")));
        }
        println!("{}", serde_json::to_string_pretty(&Value::Object(regs))?);
    }
    if args.stats {
        sim.stats().print();
    }
    Ok(())
}

/// Prints `address: word  mnemonic` for each instruction of an image.
fn cmd_disasm(image: &Path) -> Result<()> {
    let program = load_image_file(image)?;
    for (slot, &word) in program.iter().enumerate() {
        println!("{:#010x}: {word:04x}  {}", slot * 4, disassemble(word));
    }
    Ok(())
}
