//! NftScope Projector Library
//!
//! This crate provides components for projecting NFT ownership state from a
//! stream of chain receipts: decoding function-call actions, classifying
//! marketplace methods, and upserting Token/User records through a pluggable
//! entity store.

pub mod args;
pub mod decoder;
pub mod entity;
pub mod method;
pub mod projector;
pub mod receipt;
pub mod store;

// Re-export commonly used types
pub use decoder::{decode_receipt, ActionEvent};
pub use entity::{Token, User};
pub use method::{get_nft_method, is_nft_method, NftMethod};
pub use projector::{Outcome, ProjectionStats, Projector, SkipReason, StaleWritePolicy};
pub use receipt::{Action, Receipt};
pub use store::{EntityStore, MemoryStore, StoreError};
