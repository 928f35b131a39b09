//! Compilation errors for the ingot driver

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result type for compilation operations
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors that can occur while driving a compilation
#[derive(Debug, Error)]
pub enum CompileError {
    /// Reading the source file or writing an artifact file failed
    #[error("cannot access `{}`: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        source: io::Error,
    },

    /// The solc executable could not be spawned or spoken to
    #[error("failed to run solc at `{}`: {source}", .binary.display())]
    Solc {
        binary: PathBuf,
        source: io::Error,
    },

    /// solc exited abnormally without producing a standard JSON result
    #[error("solc exited with {status}: {stderr}")]
    SolcFailed {
        status: ExitStatus,
        stderr: String,
    },

    /// The binary ran but did not identify itself as solc
    #[error("`{}` did not report a solc version", .binary.display())]
    UnrecognizedCompiler { binary: PathBuf },

    /// A standard JSON payload could not be serialized or parsed
    #[error("malformed standard JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// solc rejected the source; diagnostics are reproduced verbatim
    #[error("solc rejected the source:\n{}", .diagnostics.join("\n"))]
    Compilation { diagnostics: Vec<String> },

    /// The requested source file is absent from the compiler output
    #[error("file `{file}` missing from the compiler output")]
    MissingSourceFile { file: String },

    /// The requested contract is absent from the compiler output
    #[error("contract `{contract}` not found in `{file}`")]
    MissingContract { file: String, contract: String },
}

impl CompileError {
    /// File-access error carrying the offending path
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CompileError::FileAccess {
            path: path.into(),
            source,
        }
    }
}
