//! Call Argument Parsing
//!
//! Typed, fallible view over the opaque argument payload of a function call.
//! The recognized method names are shared across contracts with different
//! argument shapes, so every field is optional and a payload that does not
//! parse at all is simply not applicable.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// The recognized fields of a marketplace call payload.
///
/// Unknown fields are ignored. `token_id` and `receiver_id` accept any
/// string-convertible JSON scalar (string or number); other shapes are
/// treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CallArgs {
    #[serde(default, deserialize_with = "string_convertible")]
    pub token_id: Option<String>,
    #[serde(default, deserialize_with = "string_convertible")]
    pub receiver_id: Option<String>,
}

fn string_convertible<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

/// Parse a raw argument payload into its recognized fields.
///
/// # Arguments
/// * `args` - The raw argument bytes from a function-call action
///
/// # Returns
/// `Some(CallArgs)` when the payload is a JSON object, `None` when it is
/// malformed or not an object. A `None` here means "does not apply", never
/// an error.
pub fn parse_call_args(args: &[u8]) -> Option<CallArgs> {
    match serde_json::from_slice::<CallArgs>(args) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            debug!(error = %err, "unparseable argument payload, skipping");
            None
        }
    }
}
