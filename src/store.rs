//! Entity Store
//!
//! Repository abstraction over the persistence collaborator. The projector
//! only ever reads a record by key and writes it back whole; everything
//! else (transactions, durability, retries) belongs to the host. A failed
//! save is fatal for the current receipt and is propagated, never swallowed.

use std::collections::HashMap;

use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::entity::{Token, User};

/// Errors surfaced by the persistence collaborator
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("failed to persist {kind} '{id}': {reason}")]
    SaveFailed {
        kind: &'static str,
        id: String,
        reason: String,
    },
}

/// Keyed access to the Token and User records.
///
/// Implementations must give read-your-writes semantics within a receipt:
/// a token saved for one action must be visible to the next action of the
/// same receipt.
#[cfg_attr(test, automock)]
pub trait EntityStore {
    /// Look up a token by id.
    fn get_token(&self, id: &str) -> Result<Option<Token>, StoreError>;

    /// Persist a token record, creating or replacing it.
    fn save_token(&mut self, token: Token) -> Result<(), StoreError>;

    /// Look up a user by address.
    fn get_user(&self, address: &str) -> Result<Option<User>, StoreError>;

    /// Persist a user record, creating or replacing it.
    fn save_user(&mut self, user: User) -> Result<(), StoreError>;
}

/// In-memory store backed by hash maps.
///
/// The reference implementation for tests, and usable as-is by hosts that
/// keep the projection in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tokens: HashMap<String, Token>,
    users: HashMap<String, User>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of token records held.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Number of user records held.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

impl EntityStore for MemoryStore {
    fn get_token(&self, id: &str) -> Result<Option<Token>, StoreError> {
        Ok(self.tokens.get(id).cloned())
    }

    fn save_token(&mut self, token: Token) -> Result<(), StoreError> {
        self.tokens.insert(token.id.clone(), token);
        Ok(())
    }

    fn get_user(&self, address: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.get(address).cloned())
    }

    fn save_user(&mut self, user: User) -> Result<(), StoreError> {
        self.users.insert(user.address.clone(), user);
        Ok(())
    }
}
