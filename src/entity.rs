//! Projected Entities
//!
//! The denormalized records the projector maintains: per-token ownership
//! state and the set of observed user identities. Both are owned by the
//! persistence collaborator; this crate only computes their next state.

use serde::{Deserialize, Serialize};

/// Ownership record for one NFT, keyed by its on-chain token id.
///
/// Created on the first recognized mutating action that references an
/// unseen token id, then mutated in place forever. Never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// Externally assigned token id, unique.
    pub id: String,
    /// Account id of the current holder.
    pub owner: String,
    /// Timestamp (nanoseconds) of the receipt that last modified this
    /// record. Non-decreasing under in-order delivery.
    pub last_change: u64,
    /// Whether the token is currently listed for resale.
    pub on_sale: bool,
}

impl Token {
    /// Create a fresh token record.
    pub fn new(
        id: impl Into<String>,
        owner: impl Into<String>,
        last_change: u64,
        on_sale: bool,
    ) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            last_change,
            on_sale,
        }
    }
}

/// An observed account identity. Existence is the only signal: created at
/// most once per address, never mutated, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Account id, unique.
    pub address: String,
}

impl User {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_new() {
        let token = Token::new("T1", "alice.near", 1000, false);
        assert_eq!(token.id, "T1");
        assert_eq!(token.owner, "alice.near");
        assert_eq!(token.last_change, 1000);
        assert!(!token.on_sale);
    }

    #[test]
    fn test_token_json_field_names() {
        let token = Token::new("T1", "alice.near", 1000, true);
        let json = serde_json::to_string(&token).unwrap();
        assert!(json.contains("\"id\""));
        assert!(json.contains("\"owner\""));
        assert!(json.contains("\"last_change\""));
        assert!(json.contains("\"on_sale\""));
    }

    #[test]
    fn test_token_json_round_trip() {
        let token = Token::new("T1", "alice.near", 1_700_000_000_000_000_000, true);
        let json = serde_json::to_string(&token).unwrap();
        let parsed: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, token);
    }

    #[test]
    fn test_user_new() {
        let user = User::new("alice.near");
        assert_eq!(user.address, "alice.near");
    }
}
