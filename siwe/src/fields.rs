//! SIWE message fields.
//!
//! [`SiweMessageFields`] maps one-to-one onto the EIP-4361 field set.
//! Instances are transient: built per authentication attempt, serialized
//! into the message text, and discarded once the signature exists.

use crate::utils::iso8601_millis;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// SIWE message version. EIP-4361 defines exactly one.
pub const SIWE_VERSION: &str = "1";

/// Statement used when the caller does not supply one.
pub const DEFAULT_STATEMENT: &str = "Sign in with Ethereum to the app.";

/// The typed fields of an EIP-4361 message.
///
/// Timestamps stay as ISO-8601 strings so that a parse → serialize round
/// trip reproduces the signed text byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiweMessageFields {
    /// RFC 4501 authority requesting the signature.
    pub domain: String,

    /// `0x`-prefixed 20-byte hex account address.
    pub address: String,

    /// Optional human-readable statement shown by the wallet.
    pub statement: Option<String>,

    /// URI the signature applies to.
    pub uri: String,

    /// Message version; always [`SIWE_VERSION`] today.
    pub version: String,

    /// EIP-155 chain id.
    pub chain_id: u64,

    /// Server-issued replay-prevention token.
    pub nonce: String,

    /// ISO-8601 issue timestamp.
    pub issued_at: String,

    /// ISO-8601 expiry; the message is invalid at or after this time.
    pub expiration_time: Option<String>,

    /// ISO-8601 start of validity.
    pub not_before: Option<String>,

    /// Opaque request correlation id.
    pub request_id: Option<String>,

    /// Ordered list of resource URIs the signature covers.
    pub resources: Option<Vec<String>>,
}

/// Caller-supplied inputs for [`SiweFieldParams::into_fields`].
///
/// Only the identity of the sign-in (domain, address, uri, chain, nonce)
/// is mandatory; everything else defaults the way a SIWE relying party
/// expects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiweFieldParams {
    /// Requesting domain.
    pub domain: String,

    /// Account address.
    pub address: String,

    /// Target URI.
    pub uri: String,

    /// EIP-155 chain id.
    pub chain_id: u64,

    /// Server-issued nonce.
    pub nonce: String,

    /// Statement override; defaults to [`DEFAULT_STATEMENT`].
    pub statement: Option<String>,

    /// Issue time; defaults to now. Tests inject a fixed value for
    /// determinism.
    pub issued_at: Option<DateTime<Utc>>,

    /// When set, `expiration_time` becomes `issued_at` plus this many
    /// minutes; otherwise no expiry is emitted.
    pub expires_in_minutes: Option<i64>,

    /// Optional request correlation id.
    pub request_id: Option<String>,

    /// Optional resource list.
    pub resources: Option<Vec<String>>,
}

impl SiweFieldParams {
    /// Fill defaults and produce the complete field set.
    ///
    /// Pure given an explicit `issued_at`; falls back to the system clock
    /// only when the caller omits it.
    #[must_use]
    pub fn into_fields(self) -> SiweMessageFields {
        let issued_at = self.issued_at.unwrap_or_else(Utc::now);
        let expiration_time = self
            .expires_in_minutes
            .map(|minutes| iso8601_millis(issued_at + Duration::minutes(minutes)));

        SiweMessageFields {
            domain: self.domain,
            address: self.address,
            statement: Some(self.statement.unwrap_or_else(|| DEFAULT_STATEMENT.to_string())),
            uri: self.uri,
            version: SIWE_VERSION.to_string(),
            chain_id: self.chain_id,
            nonce: self.nonce,
            issued_at: iso8601_millis(issued_at),
            expiration_time,
            not_before: None,
            request_id: self.request_id,
            resources: self.resources,
        }
    }
}
