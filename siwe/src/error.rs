//! Error types for SIWE message handling.

use thiserror::Error;

/// Result type alias for SIWE parse operations.
pub type Result<T> = std::result::Result<T, SiweParseError>;

/// A SIWE message string could not be decoded back into fields.
///
/// Parsing never panics; every malformed input maps to one of these
/// variants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SiweParseError {
    /// The message has fewer lines than the minimal EIP-4361 layout.
    #[error("Failed to parse SIWE message: too few lines")]
    TooFewLines,

    /// The first line is not `{domain} wants you to sign in with your
    /// Ethereum account:`.
    #[error("Failed to parse SIWE message: malformed header line")]
    MalformedHeader,

    /// The second line is not a `0x`-prefixed 20-byte hex address.
    #[error("Invalid Ethereum address")]
    InvalidAddress,

    /// The `Chain ID:` value is not a base-10 integer.
    #[error("Failed to parse SIWE message: invalid Chain ID '{0}'")]
    InvalidChainId(String),

    /// One of `URI`, `Version`, `Chain ID`, `Nonce`, `Issued At` never
    /// appeared.
    #[error("Missing required SIWE fields")]
    MissingRequiredFields,
}

/// A syntactically well-formed message failed a semantic check.
///
/// Checks run in a fixed order and the first failure wins, so a single
/// variant always identifies the earliest problem.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SiweValidationError {
    /// The address field is not a `0x`-prefixed 20-byte hex address.
    #[error("Invalid Ethereum address")]
    InvalidAddress,

    /// The message domain does not equal the expected domain.
    #[error("Domain mismatch: expected {expected}, got {actual}")]
    DomainMismatch {
        /// Domain the verifier expected.
        expected: String,
        /// Domain carried by the message.
        actual: String,
    },

    /// The message address does not equal the expected address
    /// (case-insensitive).
    #[error("Address mismatch: expected {expected}, got {actual}")]
    AddressMismatch {
        /// Address the verifier expected.
        expected: String,
        /// Address carried by the message.
        actual: String,
    },

    /// The message chain id does not equal the expected chain id.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainIdMismatch {
        /// Chain id the verifier expected.
        expected: u64,
        /// Chain id carried by the message.
        actual: u64,
    },

    /// An `Expiration Time` or `Not Before` value is not RFC 3339.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// `Expiration Time` is at or before the reference time.
    #[error("Message is expired")]
    Expired,

    /// `Not Before` is after the reference time.
    #[error("Message is not yet valid")]
    NotYetValid,

    /// The nonce is shorter than 8 characters or not alphanumeric.
    #[error("Invalid nonce format")]
    InvalidNonce,
}

/// A chain identifier string was neither `0x`-hex nor decimal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid chain ID '{0}'")]
pub struct ChainIdError(pub String);
