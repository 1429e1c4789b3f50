//! NFT Method Table
//!
//! Classifies function-call method names into the fixed vocabulary the
//! projector understands, and carries the per-method projection rule:
//! where the subject address comes from and what happens to the sale flag.
//! One declarative table instead of per-method branching.

use std::collections::HashMap;
use std::sync::LazyLock;

/// The 5 marketplace method names the projector recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NftMethod {
    /// mint_nft - observability-only marker, never projected
    MintNft,
    /// buy - caller becomes owner, listing cleared
    Buy,
    /// nft_transfer - receiver_id argument becomes owner
    NftTransfer,
    /// resell - caller stays owner, token listed for sale
    Resell,
    /// revoke - caller stays owner, listing cleared
    Revoke,
}

/// Where the subject address of an event is resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectSource {
    /// The account that signed the call.
    Caller,
    /// The `receiver_id` field of the argument payload; its absence makes
    /// the event not applicable.
    ReceiverArg,
}

/// Effect of an event on the token's `on_sale` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleEffect {
    /// Set the flag, the token is listed for resale.
    Listed,
    /// Clear the flag.
    Delisted,
    /// Keep the previous value; false when the token is first created.
    Unchanged,
}

impl SaleEffect {
    /// Resolve the flag value given the token's previous state.
    pub fn apply(self, previous: bool) -> bool {
        match self {
            SaleEffect::Listed => true,
            SaleEffect::Delisted => false,
            SaleEffect::Unchanged => previous,
        }
    }
}

/// Projection rule for one recognized method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodRule {
    pub subject: SubjectSource,
    pub sale_effect: SaleEffect,
}

impl NftMethod {
    /// Returns the on-chain method name
    pub fn name(&self) -> &'static str {
        match self {
            NftMethod::MintNft => "mint_nft",
            NftMethod::Buy => "buy",
            NftMethod::NftTransfer => "nft_transfer",
            NftMethod::Resell => "resell",
            NftMethod::Revoke => "revoke",
        }
    }

    /// Returns the projection rule, or `None` for observability-only methods
    pub fn rule(&self) -> Option<MethodRule> {
        match self {
            NftMethod::MintNft => None,
            NftMethod::Buy => Some(MethodRule {
                subject: SubjectSource::Caller,
                sale_effect: SaleEffect::Delisted,
            }),
            NftMethod::NftTransfer => Some(MethodRule {
                subject: SubjectSource::ReceiverArg,
                sale_effect: SaleEffect::Unchanged,
            }),
            NftMethod::Resell => Some(MethodRule {
                subject: SubjectSource::Caller,
                sale_effect: SaleEffect::Listed,
            }),
            NftMethod::Revoke => Some(MethodRule {
                subject: SubjectSource::Caller,
                sale_effect: SaleEffect::Delisted,
            }),
        }
    }
}

/// Static lookup table for method names
static NFT_METHODS: LazyLock<HashMap<&'static str, NftMethod>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    map.insert("mint_nft", NftMethod::MintNft);
    map.insert("buy", NftMethod::Buy);
    map.insert("nft_transfer", NftMethod::NftTransfer);
    map.insert("resell", NftMethod::Resell);
    map.insert("revoke", NftMethod::Revoke);
    map
});

/// Check if a method name belongs to the recognized marketplace vocabulary
///
/// # Arguments
/// * `method_name` - The raw method name from the function-call action
///
/// # Returns
/// `true` if the projector understands this method, `false` otherwise
pub fn is_nft_method(method_name: &str) -> bool {
    NFT_METHODS.contains_key(method_name)
}

/// Get the NFT method enum for a given name, if it matches
///
/// # Arguments
/// * `method_name` - The raw method name from the function-call action
///
/// # Returns
/// `Some(NftMethod)` if this is a recognized method, `None` otherwise
pub fn get_nft_method(method_name: &str) -> Option<NftMethod> {
    NFT_METHODS.get(method_name).copied()
}
