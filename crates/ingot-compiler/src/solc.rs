//! Binding to the external solc executable
//!
//! solc is invoked once per compilation as `solc --standard-json`, with the
//! request written to stdin and the result read from stdout. Source errors
//! come back inside the JSON result, not through the exit code; a nonzero
//! exit with no result at all means the invocation itself went wrong.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{CompileError, CompileResult};
use crate::standard_json::{StandardJsonInput, StandardJsonOutput};

/// Handle on a solc executable
#[derive(Debug, Clone)]
pub struct Solc {
    binary: PathBuf,
}

impl Default for Solc {
    /// Use `solc` from `PATH`.
    fn default() -> Self {
        Self::new("solc")
    }
}

impl Solc {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Version line reported by `solc --version`.
    ///
    /// Also serves as the availability check: an `Err` here means the
    /// executable cannot be run, or runs but is not solc.
    pub fn version(&self) -> CompileResult<String> {
        let output = Command::new(&self.binary)
            .arg("--version")
            .output()
            .map_err(|source| CompileError::Solc {
                binary: self.binary.clone(),
                source,
            })?;
        let text = String::from_utf8_lossy(&output.stdout);
        text.lines()
            .find(|line| line.starts_with("Version"))
            .map(|line| line.trim().to_string())
            .ok_or_else(|| CompileError::UnrecognizedCompiler {
                binary: self.binary.clone(),
            })
    }

    /// Run one standard JSON compilation synchronously.
    ///
    /// Fails with `CompileError::Compilation` when the result carries any
    /// error-severity diagnostic; warnings are ignored.
    pub fn compile(&self, input: &StandardJsonInput) -> CompileResult<StandardJsonOutput> {
        let request = serde_json::to_string(input)?;

        let mut child = Command::new(&self.binary)
            .arg("--standard-json")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| CompileError::Solc {
                binary: self.binary.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(request.as_bytes())
                .map_err(|source| CompileError::Solc {
                    binary: self.binary.clone(),
                    source,
                })?;
            // stdin drops here, closing the pipe so solc sees end of input
        }

        let output = child
            .wait_with_output()
            .map_err(|source| CompileError::Solc {
                binary: self.binary.clone(),
                source,
            })?;

        debug!(
            "solc exited with {} ({} bytes of output)",
            output.status,
            output.stdout.len()
        );

        if output.stdout.is_empty() && !output.status.success() {
            return Err(CompileError::SolcFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let parsed: StandardJsonOutput = serde_json::from_slice(&output.stdout)?;

        let fatal = parsed.fatal_diagnostics();
        if !fatal.is_empty() {
            return Err(CompileError::Compilation { diagnostics: fatal });
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_is_a_launch_error() {
        let solc = Solc::new("definitely-not-a-solc-binary");
        let input = StandardJsonInput::single_source("A.sol", "contract A {}");
        match solc.compile(&input) {
            Err(CompileError::Solc { binary, .. }) => {
                assert_eq!(binary, PathBuf::from("definitely-not-a-solc-binary"));
            }
            other => panic!("expected launch error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn runnable_non_solc_binary_fails_the_version_check() {
        // `echo --version` runs fine but prints no `Version ...` line.
        let solc = Solc::new("echo");
        match solc.version() {
            Err(CompileError::UnrecognizedCompiler { binary }) => {
                assert_eq!(binary, PathBuf::from("echo"));
            }
            other => panic!("expected UnrecognizedCompiler, got {:?}", other),
        }
    }
}
