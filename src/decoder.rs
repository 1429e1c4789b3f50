//! Receipt Decoder
//!
//! Extracts the ordered sequence of function-call actions from a receipt and
//! pairs each with the receipt's block timestamp. Non-call actions (native
//! transfers, account creation, deployment, key management) are silently
//! skipped.

use tracing::debug;

use crate::receipt::{Action, Receipt};

/// One recognized chain instruction, the unit the projector consumes.
///
/// Ephemeral: lives for a single projection step, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionEvent {
    /// Raw method name as recorded on chain.
    pub method_name: String,
    /// Raw argument payload, conventionally JSON.
    pub args: Vec<u8>,
    /// Account that signed the call.
    pub caller: String,
    /// Block timestamp of the enclosing receipt, nanoseconds.
    pub timestamp_nanos: u64,
}

/// Decode a receipt into its function-call events, in original order.
///
/// Lazy: actions are only inspected as the iterator is driven. A receipt
/// with no function calls yields an empty sequence; no error is possible at
/// this stage.
pub fn decode_receipt(receipt: &Receipt) -> impl Iterator<Item = ActionEvent> + '_ {
    let timestamp_nanos = receipt.timestamp_nanos;
    receipt.actions.iter().filter_map(move |action| match action {
        Action::FunctionCall {
            method_name,
            args,
            caller,
        } => {
            // Diagnostic only; projection outcome never depends on this line.
            debug!(method = %method_name, "observed function call");
            Some(ActionEvent {
                method_name: method_name.clone(),
                args: args.clone(),
                caller: caller.clone(),
                timestamp_nanos,
            })
        }
        _ => None,
    })
}
