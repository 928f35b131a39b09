//! Ingot CLI entry point
//!
//! Compiles one Solidity contract and writes its ABI and bytecode artifact
//! files. Defaults reproduce the original single-purpose tool: `Voting.sol`
//! in, `Voting.abi` and `Voting.bin` out.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use log::info;

use ingot_compiler::{compile_to_files, CompiledContract, Solc};

//-----------------------------------------------------------------------------
// Command Definition
//-----------------------------------------------------------------------------

/// Compile a Solidity contract to ABI and bytecode artifact files
#[derive(Debug, Parser)]
#[command(name = "ingot", about = "Solidity contract artifact driver")]
struct Cli {
    /// Solidity source file to compile
    #[arg(default_value = "Voting.sol")]
    source: PathBuf,

    /// Contract to extract; defaults to the source file stem
    #[arg(short, long)]
    contract: Option<String>,

    /// ABI output path; defaults to `<contract>.abi` beside the source
    #[arg(long)]
    abi_out: Option<PathBuf>,

    /// Bytecode output path; defaults to `<contract>.bin` beside the source
    #[arg(long)]
    bin_out: Option<PathBuf>,

    /// Path to the solc executable
    #[arg(long, default_value = "solc")]
    solc: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let contract = match cli.contract {
        Some(name) => name,
        None => cli
            .source
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_owned)
            .context("cannot infer a contract name from the source path; pass --contract")?,
    };
    let abi_out = cli
        .abi_out
        .unwrap_or_else(|| cli.source.with_file_name(format!("{contract}.abi")));
    let bin_out = cli
        .bin_out
        .unwrap_or_else(|| cli.source.with_file_name(format!("{contract}.bin")));

    let solc = Solc::new(cli.solc);
    info!("using {}", solc.version()?);

    let compiled = compile_to_files(&solc, &cli.source, &contract, &abi_out, &bin_out)?;

    println!("{}", summary_line(&contract, &compiled));
    println!("  {}", abi_out.display());
    println!("  {}", bin_out.display());
    Ok(())
}

/// One-line result summary. The bytecode length is reported in hex
/// characters because the object is not always plain even-length hex
/// (unlinked contracts carry `__$...$__` library placeholders).
fn summary_line(contract: &str, compiled: &CompiledContract) -> String {
    format!(
        "{} {} ({} ABI entries, {} hex chars of bytecode)",
        "compiled".green().bold(),
        contract,
        compiled.abi.len(),
        compiled.bytecode.len()
    )
}
