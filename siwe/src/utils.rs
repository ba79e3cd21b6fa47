//! Small pure helpers shared across the SIWE flow.

use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use rand::distributions::Alphanumeric;

/// Default nonce length in characters.
pub const DEFAULT_NONCE_LENGTH: usize = 16;

/// Validate an Ethereum address: `0x` followed by exactly 40 hex digits.
///
/// # Examples
///
/// ```
/// use wallet_bridge_siwe::utils::is_valid_ethereum_address;
///
/// assert!(is_valid_ethereum_address("0x1234567890abcdef1234567890abcdef12345678"));
/// assert!(!is_valid_ethereum_address("0x1234"));
/// assert!(!is_valid_ethereum_address("1234567890abcdef1234567890abcdef12345678"));
/// ```
#[must_use]
pub fn is_valid_ethereum_address(address: &str) -> bool {
    let Some(hex) = address.strip_prefix("0x") else {
        return false;
    };
    hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Validate a nonce: alphanumeric and at least 8 characters.
#[must_use]
pub fn is_valid_nonce(nonce: &str) -> bool {
    nonce.len() >= 8 && nonce.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Generate a random alphanumeric nonce of [`DEFAULT_NONCE_LENGTH`].
///
/// The one non-deterministic function in this crate. Everything that needs
/// a nonce takes it as data, so tests use fixed strings or
/// [`generate_nonce_with`] with a seeded generator.
#[must_use]
pub fn generate_nonce() -> String {
    generate_nonce_with(&mut rand::thread_rng(), DEFAULT_NONCE_LENGTH)
}

/// Generate a random alphanumeric nonce of `length` characters from an
/// injected random source.
#[must_use]
pub fn generate_nonce_with<R: Rng>(rng: &mut R, length: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Render a timestamp in the ISO-8601 shape SIWE messages carry:
/// millisecond precision with a `Z` suffix (e.g.
/// `2024-01-01T00:00:00.000Z`).
#[must_use]
pub fn iso8601_millis(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
