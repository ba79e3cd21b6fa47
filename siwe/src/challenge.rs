//! Challenge and verify request payloads.
//!
//! The controller exchanges two HTTP payloads with the server: a
//! challenge request (address + chain) that yields a SIWE message to
//! sign, and a verify request (message + signature) that yields a
//! session. Both are plain serde structs; this crate never performs the
//! HTTP call.

use crate::chain::hex_to_chain_id;
use crate::error::ChainIdError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of the challenge request sent to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeRequest {
    /// Account address, normalized to lowercase.
    pub address: String,

    /// Chain id, normalized to a decimal integer.
    pub chain_id: u64,
}

impl ChallengeRequest {
    /// Build a challenge request from raw wallet output.
    ///
    /// Lower-cases the address and accepts the chain id in either the
    /// wallet's hex form or decimal.
    ///
    /// # Errors
    ///
    /// Returns [`ChainIdError`] when the chain id string is not a number.
    pub fn new(address: &str, chain_id: &str) -> Result<Self, ChainIdError> {
        Ok(Self {
            address: address.to_lowercase(),
            chain_id: hex_to_chain_id(chain_id)?,
        })
    }
}

/// Body of the verify request sent to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    /// The exact SIWE message text that was signed.
    pub message: String,

    /// Signature produced by the wallet.
    pub signature: String,
}

impl VerifyRequest {
    /// Pair a message with its signature, verbatim.
    #[must_use]
    pub fn new(message: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            signature: signature.into(),
        }
    }
}

/// A server-issued challenge cached by the controller between the
/// challenge and verify calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// SIWE message text to present to the wallet.
    pub message: String,

    /// Nonce embedded in the message, kept for bookkeeping.
    pub nonce: String,

    /// When the server stops accepting this challenge.
    pub expires_at: DateTime<Utc>,
}

impl Challenge {
    /// Whether the challenge is still worth signing at `now`: unexpired
    /// and carrying both a message and a nonce.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now && !self.message.is_empty() && !self.nonce.is_empty()
    }

    /// [`Challenge::is_valid_at`] against the system clock.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }
}
