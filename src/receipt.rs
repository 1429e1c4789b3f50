//! Chain Receipt Types
//!
//! Inbound types delivered by the chain-following host: a receipt carries the
//! block timestamp and the ordered list of actions it executed. Only the
//! function-call variant matters to the projector; the remaining kinds exist
//! so the decoder has real non-call actions to skip.

use serde::{Deserialize, Serialize};

/// A chain-recorded outcome of executing one or more actions.
///
/// Receipts arrive one at a time, in chain block order. The host guarantees
/// well-formedness; this crate never re-validates receipt structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Receipt {
    /// Block timestamp in nanoseconds, monotonic per chain.
    pub timestamp_nanos: u64,
    /// Actions in their original execution order.
    pub actions: Vec<Action>,
}

impl Receipt {
    /// Create a receipt from a timestamp and a list of actions.
    pub fn new(timestamp_nanos: u64, actions: Vec<Action>) -> Self {
        Self {
            timestamp_nanos,
            actions,
        }
    }
}

/// One instruction within a receipt.
///
/// Mirrors the NEAR action kinds. Everything except `FunctionCall` is
/// ignored by the decoder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// A named method invocation on a contract with opaque argument bytes.
    FunctionCall {
        /// The invoked method name, e.g. `"buy"`.
        method_name: String,
        /// Raw argument payload, conventionally JSON but contract-specific.
        args: Vec<u8>,
        /// Account that signed the call.
        caller: String,
    },
    /// Native currency transfer.
    Transfer { deposit: u128 },
    CreateAccount,
    DeployContract,
    Stake,
    AddKey,
    DeleteKey,
    DeleteAccount,
}

impl Action {
    /// Convenience constructor for a function-call action.
    pub fn function_call(
        method_name: impl Into<String>,
        args: impl Into<Vec<u8>>,
        caller: impl Into<String>,
    ) -> Self {
        Action::FunctionCall {
            method_name: method_name.into(),
            args: args.into(),
            caller: caller.into(),
        }
    }

    /// Check whether this action is a function call.
    pub fn is_function_call(&self) -> bool {
        matches!(self, Action::FunctionCall { .. })
    }
}
