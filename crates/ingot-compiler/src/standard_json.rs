//! Request and result types for the solc standard-JSON interface
//!
//! The request embeds the source text under its filename and asks for every
//! output kind for every contract (`{"*": {"*": ["*"]}}`). The result maps
//! filename to contract name to artifact. Navigation is typed: looking up an
//! absent file or contract yields an explicit error instead of a missing-key
//! panic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CompileError, CompileResult};

//-----------------------------------------------------------------------------
// Request Types
//-----------------------------------------------------------------------------

/// A complete standard JSON compilation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardJsonInput {
    /// Input language tag, always `"Solidity"` here
    pub language: String,

    /// Filename to source content
    pub sources: BTreeMap<String, SourceContent>,

    /// Compiler settings, limited to output selection
    pub settings: Settings,
}

/// Source text for one input file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceContent {
    pub content: String,
}

/// Compiler settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// file -> contract -> requested output kinds
    #[serde(rename = "outputSelection")]
    pub output_selection: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl StandardJsonInput {
    /// Build a request for one Solidity source file, selecting all outputs
    /// for all contracts in all files.
    pub fn single_source(name: impl Into<String>, content: impl Into<String>) -> Self {
        let mut sources = BTreeMap::new();
        sources.insert(
            name.into(),
            SourceContent {
                content: content.into(),
            },
        );

        let mut per_contract = BTreeMap::new();
        per_contract.insert("*".to_string(), vec!["*".to_string()]);
        let mut output_selection = BTreeMap::new();
        output_selection.insert("*".to_string(), per_contract);

        Self {
            language: "Solidity".to_string(),
            sources,
            settings: Settings { output_selection },
        }
    }
}

//-----------------------------------------------------------------------------
// Result Types
//-----------------------------------------------------------------------------

/// A complete standard JSON compilation result
///
/// solc reports source errors inside this payload rather than through its
/// exit code, so `errors` must be consulted before trusting `contracts`.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardJsonOutput {
    #[serde(default)]
    pub errors: Vec<Diagnostic>,

    /// filename -> contract name -> compiled artifact
    #[serde(default)]
    pub contracts: BTreeMap<String, BTreeMap<String, ContractArtifact>>,
}

impl StandardJsonOutput {
    /// Navigate to the artifact for one contract in one source file.
    pub fn contract(&self, file: &str, name: &str) -> CompileResult<&ContractArtifact> {
        let contracts = self
            .contracts
            .get(file)
            .ok_or_else(|| CompileError::MissingSourceFile {
                file: file.to_string(),
            })?;
        contracts
            .get(name)
            .ok_or_else(|| CompileError::MissingContract {
                file: file.to_string(),
                contract: name.to_string(),
            })
    }

    /// Rendered messages of all error-severity diagnostics.
    pub fn fatal_diagnostics(&self) -> Vec<String> {
        self.errors
            .iter()
            .filter(|d| d.is_error())
            .map(|d| d.rendered().to_string())
            .collect()
    }
}

/// One compiler diagnostic (error, warning, or info)
#[derive(Debug, Clone, Deserialize)]
pub struct Diagnostic {
    #[serde(default)]
    pub severity: String,

    /// Diagnostic category as reported by solc, e.g. `ParserError`
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub component: String,

    #[serde(default)]
    pub message: String,

    #[serde(rename = "formattedMessage", default)]
    pub formatted_message: Option<String>,
}

impl Diagnostic {
    pub fn is_error(&self) -> bool {
        self.severity == "error"
    }

    /// The human-readable form, preferring solc's formatted rendering.
    pub fn rendered(&self) -> &str {
        self.formatted_message.as_deref().unwrap_or(&self.message)
    }
}

/// Compiled outputs for one contract
///
/// Only the ABI and the bytecode object are modeled; other output kinds the
/// wildcard selection produces are ignored during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractArtifact {
    #[serde(default)]
    pub abi: Vec<AbiEntry>,

    #[serde(default)]
    pub evm: EvmOutput,
}

/// EVM-target outputs for one contract
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvmOutput {
    #[serde(default)]
    pub bytecode: BytecodeObject,
}

/// Deployment bytecode as emitted by solc
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BytecodeObject {
    /// Hexadecimal instruction stream, empty for unlinked or abstract contracts
    #[serde(default)]
    pub object: String,
}

/// One entry of a contract's interface description
///
/// Fields this driver does not interpret are retained in `extra` so that
/// re-serializing an entry reproduces everything solc emitted for it.
/// `inputs` and `outputs` are optional rather than defaulted: solc writes an
/// explicit empty array for a parameterless function but omits `outputs` on
/// events entirely, and both shapes must survive re-serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbiEntry {
    /// Entry kind: `function`, `event`, `constructor`, `fallback`, ...
    #[serde(rename = "type")]
    pub kind: String,

    /// Absent for constructors and fallback functions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<AbiParam>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<AbiParam>>,

    #[serde(rename = "stateMutability", default, skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One argument or return slot of an interface entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbiParam {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
