//! MIPS instruction-set simulator CLI.
//!
//! This binary provides a single entry point for the simulator. It performs:
//! 1. **Run:** Load a hex program, execute it to halt, and write the execution trace.
//! 2. **Disassemble:** Decode a hex program and print one instruction per line without running it.

use clap::{Parser, Subcommand};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use mipsim_core::common::SimError;
use mipsim_core::config::Config;
use mipsim_core::isa::decode::decode_all;
use mipsim_core::sim::loader;
use mipsim_core::Simulator;
use tracing_subscriber::EnvFilter;

/// Default program location, relative to the working directory.
const DEFAULT_INPUT: &str = "input/input.txt";
/// Default trace location, relative to the working directory.
const DEFAULT_OUTPUT: &str = "output/output.txt";

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "MIPS instruction-set simulator",
    long_about = "Decode a program of hex instruction words, run it against a register file and flat memory, and write a per-step trace.\n\nExamples:\n  mipsim run\n  mipsim run program.hex -o trace.txt --stats\n  mipsim disasm program.hex"
)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute a program to halt and write the trace.
    Run {
        /// Hex program, one instruction word per line.
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Trace output file; parent directories are created.
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Memory capacity in words (overrides the configuration).
        #[arg(long)]
        memory_words: Option<usize>,

        /// Print run statistics after the final state.
        #[arg(long)]
        stats: bool,
    },

    /// Print the decoded program without executing it.
    Disasm {
        /// Hex program, one instruction word per line.
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            input,
            output,
            config,
            memory_words,
            stats,
        } => cmd_run(&input, &output, config.as_deref(), memory_words, stats),
        Commands::Disasm { input } => cmd_disasm(&input),
    };

    if let Err(e) = result {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs a program and writes its trace.
///
/// Setup failures (config, program, trace file) are returned. Once the
/// program is running, a fault prints the partial state and exits with code 1
/// after the partial trace is flushed.
fn cmd_run(
    input: &Path,
    output: &Path,
    config_path: Option<&Path>,
    memory_words: Option<usize>,
    show_stats: bool,
) -> Result<(), SimError> {
    let mut config = match config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(words) = memory_words {
        config.memory.words = words;
    }

    let words = loader::load_hex_file(input)?;
    let mut sim = Simulator::new(config);
    let loaded = sim.load(&words)?;
    println!("[*] Loaded {loaded} instructions from {}", input.display());

    let mut trace = open_trace(output)?;
    let outcome = sim.run(&mut trace);
    let flushed = trace.flush().map_err(SimError::Trace);

    match outcome {
        Ok(summary) => {
            flushed?;
            tracing::debug!(output = %output.display(), "trace written");
            println!("[*] Halted at PC {} after {} steps", summary.final_pc, summary.steps);
            println!("{}", sim.state_snapshot());
            if show_stats {
                summary.stats.print();
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(pc = sim.cpu.pc, "run aborted");
            eprintln!("\n[!] FATAL: {e}");
            sim.cpu.dump_state();
            println!("{}", sim.state_snapshot());
            if show_stats {
                sim.cpu.stats.print();
            }
            process::exit(1);
        }
    }
}

fn open_trace(path: &Path) -> Result<BufWriter<File>, SimError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SimError::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| SimError::io(path, e))?;
    Ok(BufWriter::new(file))
}

/// Prints the decoded program. An undecodable word fails the whole listing.
fn cmd_disasm(input: &Path) -> Result<(), SimError> {
    let words = loader::load_hex_file(input)?;
    let program = decode_all(&words)?;
    for (idx, d) in program.iter().enumerate() {
        println!("{idx:>4}: {:08x}  {}", d.raw, d.inst);
    }
    Ok(())
}
