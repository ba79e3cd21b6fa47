//! Semantic validation of parsed SIWE messages.
//!
//! Parsing says "this text is a SIWE message"; validation says "this
//! message is the one we expect, from the account we expect, valid right
//! now". The controller runs this on the server-issued challenge before
//! letting the wallet sign it.

use crate::error::SiweValidationError;
use crate::fields::SiweMessageFields;
use crate::utils::{is_valid_ethereum_address, is_valid_nonce};
use chrono::{DateTime, Utc};

/// Expectations to validate a message against.
///
/// Every field is optional; unset expectations are skipped. `now` pins
/// the time-window checks for deterministic tests and defaults to the
/// system clock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Domain the message must carry.
    pub expected_domain: Option<String>,

    /// Address the message must carry (compared case-insensitively).
    pub expected_address: Option<String>,

    /// Chain id the message must carry.
    pub expected_chain_id: Option<u64>,

    /// Reference time for the expiry and not-before checks.
    pub now: Option<DateTime<Utc>>,
}

/// Validate `fields` against `options`.
///
/// Checks run in a fixed order and short-circuit on the first failure:
/// address shape, domain, address, chain id, expiry (strict), not-before
/// (inclusive), nonce shape.
///
/// # Examples
///
/// ```
/// use wallet_bridge_siwe::{SiweFieldParams, ValidateOptions, validate_siwe_message};
///
/// let fields = SiweFieldParams {
///     domain: "example.com".to_string(),
///     address: "0x1234567890abcdef1234567890abcdef12345678".to_string(),
///     uri: "https://example.com".to_string(),
///     chain_id: 1,
///     nonce: "abc123xyz456".to_string(),
///     ..SiweFieldParams::default()
/// }
/// .into_fields();
/// let options = ValidateOptions {
///     expected_domain: Some("example.com".to_string()),
///     ..ValidateOptions::default()
/// };
/// assert!(validate_siwe_message(&fields, &options).is_ok());
/// ```
///
/// # Errors
///
/// Returns the [`SiweValidationError`] for the earliest failed check.
pub fn validate_siwe_message(
    fields: &SiweMessageFields,
    options: &ValidateOptions,
) -> Result<(), SiweValidationError> {
    if !is_valid_ethereum_address(&fields.address) {
        return Err(SiweValidationError::InvalidAddress);
    }

    if let Some(expected) = &options.expected_domain {
        if &fields.domain != expected {
            return Err(SiweValidationError::DomainMismatch {
                expected: expected.clone(),
                actual: fields.domain.clone(),
            });
        }
    }

    if let Some(expected) = &options.expected_address {
        if !fields.address.eq_ignore_ascii_case(expected) {
            return Err(SiweValidationError::AddressMismatch {
                expected: expected.clone(),
                actual: fields.address.clone(),
            });
        }
    }

    if let Some(expected) = options.expected_chain_id {
        if fields.chain_id != expected {
            return Err(SiweValidationError::ChainIdMismatch {
                expected,
                actual: fields.chain_id,
            });
        }
    }

    let now = options.now.unwrap_or_else(Utc::now);

    if let Some(expiration_time) = &fields.expiration_time {
        if parse_timestamp(expiration_time)? <= now {
            return Err(SiweValidationError::Expired);
        }
    }

    if let Some(not_before) = &fields.not_before {
        if parse_timestamp(not_before)? > now {
            return Err(SiweValidationError::NotYetValid);
        }
    }

    if !is_valid_nonce(&fields.nonce) {
        return Err(SiweValidationError::InvalidNonce);
    }

    Ok(())
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, SiweValidationError> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|_| SiweValidationError::InvalidTimestamp(value.to_string()))
}
