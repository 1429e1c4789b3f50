//! Action Projector
//!
//! Turns recognized function-call events into upserts against the Token and
//! User stores. Every not-applicable outcome (unknown method, missing field,
//! malformed payload) is a skip, never an error: one unprocessable event
//! must not block the rest of the stream. Only store failures propagate.

use tracing::{debug, info};

use crate::args::parse_call_args;
use crate::decoder::{decode_receipt, ActionEvent};
use crate::entity::{Token, User};
use crate::method::{get_nft_method, SubjectSource};
use crate::receipt::Receipt;
use crate::store::{EntityStore, StoreError};

/// Policy for events whose timestamp does not advance the token's
/// `last_change`.
///
/// Chain-order delivery makes stale events impossible, so `Overwrite` is
/// the default; `RejectStale` is for hosts that cannot rule out re-delivery
/// of old receipts after a reorganization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleWritePolicy {
    /// Apply every event regardless of timestamp.
    #[default]
    Overwrite,
    /// Skip events whose timestamp is not strictly newer than the token's
    /// current `last_change`.
    RejectStale,
}

/// Why an event was not applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Method name outside the recognized vocabulary.
    UnrecognizedMethod,
    /// `mint_nft`: logged for observability, never projected.
    ObservedOnly,
    /// Argument payload was not parseable JSON.
    MalformedArgs,
    /// Transfer without a `receiver_id` field.
    MissingReceiver,
    /// Resolved subject address was empty.
    EmptySubject,
    /// Payload carried no `token_id`; not an NFT-state-affecting call.
    MissingTokenId,
    /// Event timestamp did not advance `last_change` under
    /// [`StaleWritePolicy::RejectStale`].
    StaleTimestamp,
}

/// Result of projecting one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Token and User state were written.
    Applied { token_id: String },
    /// The event did not apply; no state was touched.
    Skipped(SkipReason),
}

impl Outcome {
    /// Check whether state was written.
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied { .. })
    }
}

/// Counters for one receipt's projection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionStats {
    /// Function-call events decoded from the receipt.
    pub processed: usize,
    /// Events that resulted in a state write.
    pub applied: usize,
    /// Events skipped as not applicable.
    pub skipped: usize,
}

/// Idempotent projector from chain events to ownership state.
///
/// Holds no state of its own between invocations; re-applying an event
/// against the same prior store state yields the same resulting state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Projector {
    policy: StaleWritePolicy,
}

impl Projector {
    /// Create a projector with the default overwrite policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a projector with an explicit stale-write policy.
    pub fn with_policy(policy: StaleWritePolicy) -> Self {
        Self { policy }
    }

    /// Get the configured stale-write policy.
    pub fn policy(&self) -> StaleWritePolicy {
        self.policy
    }

    /// Project every function-call event of one receipt, in order.
    ///
    /// Later actions overwrite earlier ones within the same receipt. Stops
    /// at the first store error; skips never stop the stream.
    pub fn project_receipt(
        &self,
        store: &mut dyn EntityStore,
        receipt: &Receipt,
    ) -> Result<ProjectionStats, StoreError> {
        let mut stats = ProjectionStats::default();
        for event in decode_receipt(receipt) {
            stats.processed += 1;
            match self.project_event(store, &event)? {
                Outcome::Applied { .. } => stats.applied += 1,
                Outcome::Skipped(_) => stats.skipped += 1,
            }
        }
        Ok(stats)
    }

    /// Project a single event.
    ///
    /// Implements the per-method rule table: resolve the subject address,
    /// extract the token id, upsert the token, get-or-create the user.
    pub fn project_event(
        &self,
        store: &mut dyn EntityStore,
        event: &ActionEvent,
    ) -> Result<Outcome, StoreError> {
        let Some(method) = get_nft_method(&event.method_name) else {
            return Ok(Outcome::Skipped(SkipReason::UnrecognizedMethod));
        };

        let Some(rule) = method.rule() else {
            info!(method = method.name(), caller = %event.caller, "observed marker method");
            return Ok(Outcome::Skipped(SkipReason::ObservedOnly));
        };

        let Some(args) = parse_call_args(&event.args) else {
            return Ok(Outcome::Skipped(SkipReason::MalformedArgs));
        };

        let subject = match rule.subject {
            SubjectSource::Caller => event.caller.clone(),
            SubjectSource::ReceiverArg => match args.receiver_id {
                Some(receiver) => receiver,
                None => {
                    debug!(method = method.name(), "transfer without receiver, skipping");
                    return Ok(Outcome::Skipped(SkipReason::MissingReceiver));
                }
            },
        };

        // No subject ever means the call is not NFT-related.
        if subject.is_empty() {
            return Ok(Outcome::Skipped(SkipReason::EmptySubject));
        }

        let Some(token_id) = args.token_id else {
            debug!(method = method.name(), subject = %subject, "no token id, skipping");
            return Ok(Outcome::Skipped(SkipReason::MissingTokenId));
        };

        let token = match store.get_token(&token_id)? {
            Some(mut existing) => {
                if self.policy == StaleWritePolicy::RejectStale
                    && event.timestamp_nanos <= existing.last_change
                {
                    debug!(
                        token_id = %token_id,
                        event_ts = event.timestamp_nanos,
                        last_change = existing.last_change,
                        "stale event rejected"
                    );
                    return Ok(Outcome::Skipped(SkipReason::StaleTimestamp));
                }
                existing.owner = subject.clone();
                existing.last_change = event.timestamp_nanos;
                existing.on_sale = rule.sale_effect.apply(existing.on_sale);
                existing
            }
            None => Token::new(
                token_id.clone(),
                subject.clone(),
                event.timestamp_nanos,
                rule.sale_effect.apply(false),
            ),
        };

        info!(
            method = method.name(),
            subject = %subject,
            token_id = %token_id,
            on_sale = token.on_sale,
            "projecting ownership change"
        );
        store.save_token(token)?;

        if store.get_user(&subject)?.is_none() {
            store.save_user(User::new(subject))?;
        }

        Ok(Outcome::Applied { token_id })
    }
}
