//! Typed navigation over a canned solc standard JSON result
//!
//! These tests exercise the result types against a fixture shaped like real
//! solc output, so they run without a solc installation.

use ingot_compiler::{CompileError, StandardJsonOutput};

/// Abbreviated but structurally faithful solc output for a Voting contract
/// with one public `vote(uint8)` function and one `Voted` event.
const VOTING_OUTPUT: &str = r#"{
    "errors": [
        {
            "component": "general",
            "errorCode": "3420",
            "formattedMessage": "Warning: Source file does not specify required compiler version!",
            "message": "Source file does not specify required compiler version!",
            "severity": "warning",
            "sourceLocation": { "end": -1, "file": "Voting.sol", "start": -1 },
            "type": "Warning"
        }
    ],
    "contracts": {
        "Voting.sol": {
            "Voting": {
                "abi": [
                    {
                        "inputs": [
                            { "indexed": false, "internalType": "uint8", "name": "candidate", "type": "uint8" }
                        ],
                        "name": "Voted",
                        "anonymous": false,
                        "type": "event"
                    },
                    {
                        "inputs": [
                            { "internalType": "uint8", "name": "candidate", "type": "uint8" }
                        ],
                        "name": "vote",
                        "outputs": [],
                        "stateMutability": "nonpayable",
                        "type": "function"
                    }
                ],
                "evm": {
                    "bytecode": {
                        "object": "6080604052348015600e575f5ffd5b50603e80601a5f395ff3fe"
                    }
                }
            }
        }
    },
    "sources": { "Voting.sol": { "id": 0 } }
}"#;

#[test]
fn contract_lookup_finds_voting() {
    let output: StandardJsonOutput = serde_json::from_str(VOTING_OUTPUT).unwrap();
    let artifact = output.contract("Voting.sol", "Voting").unwrap();
    assert_eq!(artifact.abi.len(), 2);
    assert!(!artifact.evm.bytecode.object.is_empty());
}

#[test]
fn abi_contains_vote_function() {
    let output: StandardJsonOutput = serde_json::from_str(VOTING_OUTPUT).unwrap();
    let artifact = output.contract("Voting.sol", "Voting").unwrap();

    let vote = artifact
        .abi
        .iter()
        .find(|entry| entry.name.as_deref() == Some("vote"))
        .expect("vote entry present");
    assert_eq!(vote.kind, "function");
    let inputs = vote.inputs.as_deref().expect("vote declares inputs");
    assert_eq!(inputs.len(), 1);
    assert_eq!(inputs[0].kind, "uint8");
    assert_eq!(vote.state_mutability.as_deref(), Some("nonpayable"));
    // Explicitly empty in the fixture, so it stays present after parsing.
    assert!(matches!(vote.outputs.as_deref(), Some([])));
}

#[test]
fn missing_contract_is_a_typed_error() {
    let output: StandardJsonOutput = serde_json::from_str(VOTING_OUTPUT).unwrap();
    match output.contract("Voting.sol", "Ballot") {
        Err(CompileError::MissingContract { file, contract }) => {
            assert_eq!(file, "Voting.sol");
            assert_eq!(contract, "Ballot");
        }
        other => panic!("expected MissingContract, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn missing_source_file_is_a_typed_error() {
    let output: StandardJsonOutput = serde_json::from_str(VOTING_OUTPUT).unwrap();
    match output.contract("Ballot.sol", "Voting") {
        Err(CompileError::MissingSourceFile { file }) => assert_eq!(file, "Ballot.sol"),
        other => panic!("expected MissingSourceFile, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn warnings_are_not_fatal() {
    let output: StandardJsonOutput = serde_json::from_str(VOTING_OUTPUT).unwrap();
    assert_eq!(output.errors.len(), 1);
    assert!(output.fatal_diagnostics().is_empty());
}

#[test]
fn abi_round_trips_through_json() {
    let output: StandardJsonOutput = serde_json::from_str(VOTING_OUTPUT).unwrap();
    let artifact = output.contract("Voting.sol", "Voting").unwrap();

    let json = serde_json::to_string(&artifact.abi).unwrap();
    let reparsed: Vec<ingot_compiler::AbiEntry> = serde_json::from_str(&json).unwrap();
    assert_eq!(reparsed.len(), artifact.abi.len());

    // Fields the driver does not model survive the round trip.
    let event = reparsed
        .iter()
        .find(|entry| entry.kind == "event")
        .expect("event entry present");
    assert_eq!(event.extra["anonymous"], false);
    let event_inputs = event.inputs.as_deref().expect("event declares inputs");
    assert_eq!(event_inputs[0].extra["indexed"], false);
}

#[test]
fn emitted_abi_keeps_empty_parameter_lists() {
    let output: StandardJsonOutput = serde_json::from_str(VOTING_OUTPUT).unwrap();
    let artifact = output.contract("Voting.sol", "Voting").unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&artifact.abi).unwrap()).unwrap();
    let vote = json
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["name"] == "vote")
        .expect("vote entry present");
    // solc emitted `"outputs": []` for the void function; the written ABI
    // must carry it too, not a pruned subset of the compiler's output.
    assert_eq!(vote["outputs"], serde_json::json!([]));
    assert_eq!(vote["inputs"].as_array().unwrap().len(), 1);
}
