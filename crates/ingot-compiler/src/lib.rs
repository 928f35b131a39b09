//! Ingot compiler driver
//!
//! A thin, single-shot driver around the external `solc` compiler: read one
//! Solidity source file, submit it through solc's standard-JSON interface,
//! and persist the named contract's ABI and deployment bytecode as two
//! artifact files. All lexing, type checking, and code generation happen
//! inside solc; this crate owns only the request construction, the typed
//! view of the result, and the artifact writes.

pub mod error;
pub mod pipeline;
pub mod solc;
pub mod standard_json;

pub use error::{CompileError, CompileResult};
pub use pipeline::{compile_source, compile_to_files, CompiledContract};
pub use solc::Solc;
pub use standard_json::{AbiEntry, AbiParam, ContractArtifact, StandardJsonInput, StandardJsonOutput};
