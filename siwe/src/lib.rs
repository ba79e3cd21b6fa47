//! # Wallet Bridge SIWE
//!
//! Sign-In with Ethereum ([EIP-4361]) message construction, parsing and
//! validation for the wallet bridge extension.
//!
//! Everything here is a pure function over values: build the canonical
//! message text from typed fields, parse a message back into fields,
//! validate a parsed message against expectations, and a handful of
//! helpers (chain-id formatting, nonce generation, challenge freshness).
//! The one exception is [`utils::generate_nonce`], which draws from the
//! thread-local RNG; use [`utils::generate_nonce_with`] to inject a
//! seeded source in tests.
//!
//! The message text is the externally observable contract: it must match
//! what any EIP-4361 verifier reproduces, byte for byte.
//!
//! ## Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use wallet_bridge_siwe::{
//!     SiweFieldParams, ValidateOptions, create_siwe_message, parse_siwe_message,
//!     validate_siwe_message,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fields = SiweFieldParams {
//!     domain: "example.com".to_string(),
//!     address: "0x1234567890abcdef1234567890abcdef12345678".to_string(),
//!     uri: "https://example.com".to_string(),
//!     chain_id: 1,
//!     nonce: "abc123xyz456".to_string(),
//!     issued_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single(),
//!     ..SiweFieldParams::default()
//! }
//! .into_fields();
//!
//! let message = create_siwe_message(&fields);
//! let parsed = parse_siwe_message(&message)?;
//! assert_eq!(parsed, fields);
//!
//! let options = ValidateOptions {
//!     expected_domain: Some("example.com".to_string()),
//!     expected_chain_id: Some(1),
//!     ..ValidateOptions::default()
//! };
//! validate_siwe_message(&parsed, &options)?;
//! # Ok(())
//! # }
//! ```
//!
//! [EIP-4361]: https://eips.ethereum.org/EIPS/eip-4361

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

// Public modules
pub mod chain;
pub mod challenge;
pub mod error;
pub mod fields;
pub mod message;
pub mod utils;
pub mod validate;

// Re-export main types for convenience
pub use chain::{chain_id_to_hex, chain_name, hex_to_chain_id};
pub use challenge::{Challenge, ChallengeRequest, VerifyRequest};
pub use error::{ChainIdError, Result, SiweParseError, SiweValidationError};
pub use fields::{DEFAULT_STATEMENT, SIWE_VERSION, SiweFieldParams, SiweMessageFields};
pub use message::{create_siwe_message, parse_siwe_message};
pub use utils::{generate_nonce, generate_nonce_with, is_valid_ethereum_address};
pub use validate::{ValidateOptions, validate_siwe_message};
