//! Logic Lab - command line front end for the teaching circuits.
//!
//! # Usage
//!
//! ```bash
//! logiclab eval mux I3=1 S0=1 S1=1
//! logiclab table gray
//! logiclab run walkthrough.stim --segments
//! ```

use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use logic_lab_core::{
    dsl,
    error::Result,
    render::{RenderAdapter, TextRenderer},
    CircuitKind, CircuitView, Session, SessionConfig, TruthTable,
};

/// Digital logic teaching circuits
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Start decoder and multiplexer with their enable pin low
    #[arg(long, global = true)]
    disabled: bool,

    /// Allow several priority encoder lines to be high at once
    #[arg(long, global = true)]
    multi_request: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one circuit for the given inputs
    Eval {
        /// Circuit: decoder, encoder, gray, mux or bcd
        circuit: CircuitKind,

        /// Input assignments such as S0=1
        #[arg(value_name = "PIN=BIT")]
        assignments: Vec<String>,

        /// Draw the 7-segment digit for bcd
        #[arg(long)]
        segments: bool,
    },

    /// Print the full truth table of a circuit
    Table {
        /// Circuit: decoder, encoder, gray, mux or bcd
        circuit: CircuitKind,
    },

    /// Run a stimulus script, printing every visible change
    Run {
        /// Path to the stimulus script
        #[arg(value_name = "SCRIPT_FILE")]
        script: PathBuf,

        /// Draw the 7-segment digit for bcd
        #[arg(long)]
        segments: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = SessionConfig::new()
        .with_enables_high(!args.disabled)
        .with_exclusive_encoder_inputs(!args.multi_request);

    match args.command {
        Command::Eval {
            circuit,
            assignments,
            segments,
        } => {
            // Evaluated as one input set; click semantics such as exclusive
            // encoder lines only apply to sessions
            let inputs = config.initial_inputs(circuit).with_assignments(&assignments)?;
            let view = CircuitView::new(inputs);

            let mut renderer = TextRenderer::new(io::stdout().lock()).with_segment_art(segments);
            renderer.render(&view)?;
        }

        Command::Table { circuit } => {
            log::info!("enumerating {} inputs of {}", circuit.input_count(), circuit.title());
            print!("{}", TruthTable::for_kind(circuit));
        }

        Command::Run { script, segments } => {
            let stimulus = dsl::parse_file(&script)?;
            log::info!("{} steps in {}", stimulus.steps.len(), script.display());

            let renderer = TextRenderer::new(io::stdout().lock()).with_segment_art(segments);
            let mut session = Session::with_adapter(config, renderer);
            stimulus.run(&mut session)?;
        }
    }

    Ok(())
}
