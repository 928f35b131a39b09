//! Compilation pipeline: read source → compile → extract → write artifacts
//!
//! One linear pass per invocation, no state kept between runs. Both artifact
//! strings are extracted before either file is written, so a failed run
//! leaves no output files behind.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::{CompileError, CompileResult};
use crate::solc::Solc;
use crate::standard_json::{AbiEntry, StandardJsonInput};

/// The two artifacts the driver extracts for one contract
#[derive(Debug, Clone)]
pub struct CompiledContract {
    /// Interface description, one entry per callable function or event
    pub abi: Vec<AbiEntry>,

    /// Deployment bytecode as a hexadecimal string
    pub bytecode: String,
}

impl CompiledContract {
    /// Compact JSON serialization of the ABI, the form written to disk.
    pub fn abi_json(&self) -> CompileResult<String> {
        Ok(serde_json::to_string(&self.abi)?)
    }
}

/// Compile one source file and extract the named contract's artifacts.
pub fn compile_source(
    solc: &Solc,
    source_path: &Path,
    contract_name: &str,
) -> CompileResult<CompiledContract> {
    let source =
        fs::read_to_string(source_path).map_err(|e| CompileError::file_access(source_path, e))?;

    // The output is keyed by the name the request used, so use the bare
    // file name rather than the full path.
    let file_name = source_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| source_path.display().to_string());

    let input = StandardJsonInput::single_source(&file_name, source);
    debug!(
        "compiling `{}` in {} with {}",
        contract_name,
        file_name,
        solc.binary().display()
    );
    let output = solc.compile(&input)?;

    let artifact = output.contract(&file_name, contract_name)?;
    Ok(CompiledContract {
        abi: artifact.abi.clone(),
        bytecode: artifact.evm.bytecode.object.clone(),
    })
}

/// The full driver operation: compile and persist both artifact files.
pub fn compile_to_files(
    solc: &Solc,
    source_path: &Path,
    contract_name: &str,
    abi_path: &Path,
    bin_path: &Path,
) -> CompileResult<CompiledContract> {
    let compiled = compile_source(solc, source_path, contract_name)?;
    let abi_json = compiled.abi_json()?;

    write_artifact(abi_path, &abi_json)?;
    write_artifact(bin_path, &compiled.bytecode)?;
    info!(
        "wrote {} and {}",
        abi_path.display(),
        bin_path.display()
    );

    Ok(compiled)
}

fn write_artifact(path: &Path, contents: &str) -> CompileResult<()> {
    fs::write(path, contents).map_err(|e| CompileError::file_access(path, e))
}
