//! c0 Dump Driver
//!
//! Loads an AST node or an IR unit from its JSON form and prints it with
//! the frontend's debug printers.

use c0_common::CompilerError;
use c0_frontend::{FmtConfig, ForStep, Frontend};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, error};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "c0fmt")]
#[command(about = "c0 AST and IR dump tool")]
#[command(version = "0.1.0")]
struct Cli {
    /// JSON file with printer settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an AST node
    Ast {
        /// Input AST file (JSON)
        input: PathBuf,

        /// Maximum expansion depth
        #[arg(short, long, default_value_t = 3)]
        depth: u32,

        /// What the step slot of a for loop shows
        #[arg(long, value_enum)]
        for_step: Option<StepArg>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print an IR unit
    Ir {
        /// Input IR file (JSON)
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum StepArg {
    /// Repeat the loop's start expression
    Start,
    /// Show the loop's end expression
    End,
}

impl From<StepArg> for ForStep {
    fn from(arg: StepArg) -> Self {
        match arg {
            StepArg::Start => ForStep::Start,
            StepArg::End => ForStep::End,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CompilerError> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Ast { input, depth, for_step, output } => {
            let config = match for_step {
                Some(step) => config.with_for_step(step.into()),
                None => config,
            };
            let text = dump_ast(&input, depth, &config)?;
            write_output(output.as_deref(), &text)
        }
        Commands::Ir { input, output } => {
            let text = dump_ir(&input, &config)?;
            write_output(output.as_deref(), &text)
        }
    }
}

fn read_file(path: &Path) -> Result<String, CompilerError> {
    fs::read_to_string(path).map_err(|e| CompilerError::io_error(&path.display().to_string(), &e))
}

fn load_config(path: Option<&Path>) -> Result<FmtConfig, CompilerError> {
    let Some(path) = path else {
        return Ok(FmtConfig::default());
    };
    debug!("Loading printer config from {}", path.display());
    let text = read_file(path)?;
    serde_json::from_str(&text)
        .map_err(|e| CompilerError::invalid_input(format!("bad config {}: {}", path.display(), e)))
}

fn dump_ast(input: &Path, depth: u32, config: &FmtConfig) -> Result<String, CompilerError> {
    let node = Frontend::node_from_json(&read_file(input)?)?;
    debug!("Loaded {} from {}", node.kind_name(), input.display());
    Frontend::dump_node(&node, depth, config)
}

fn dump_ir(input: &Path, config: &FmtConfig) -> Result<String, CompilerError> {
    let unit = Frontend::unit_from_json(&read_file(input)?)?;
    debug!("Loaded {} functions from {}", unit.functions.len(), input.display());
    Frontend::dump_unit(&unit, config)
}

fn write_output(path: Option<&Path>, text: &str) -> Result<(), CompilerError> {
    match path {
        Some(path) => {
            fs::write(path, text).map_err(|e| CompilerError::io_error(&path.display().to_string(), &e))?;
            debug!("Output written to {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}
