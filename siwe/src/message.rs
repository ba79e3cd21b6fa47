//! SIWE message serialization and parsing.
//!
//! [`create_siwe_message`] renders the EIP-4361 text layout bit-for-bit:
//! the string it produces is what the wallet signs, so any byte of drift
//! breaks signature verification on the server. [`parse_siwe_message`] is
//! its inverse, tolerant enough to decode messages produced by other
//! EIP-4361 implementations.

use crate::error::{Result, SiweParseError};
use crate::fields::SiweMessageFields;
use crate::utils::is_valid_ethereum_address;

/// Suffix of the fixed EIP-4361 header line; everything before it is the
/// domain.
const HEADER_SUFFIX: &str = " wants you to sign in with your Ethereum account:";

/// Serialize fields into the canonical EIP-4361 message text.
///
/// Layout: header line, address line, optional blank line + statement,
/// blank line, then `URI`, `Version`, `Chain ID`, `Nonce`, `Issued At`
/// in that exact order, followed by the optional `Expiration Time`,
/// `Not Before`, `Request ID` and `Resources:` block.
///
/// # Examples
///
/// ```
/// use wallet_bridge_siwe::{SiweFieldParams, create_siwe_message};
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
/// let message = create_siwe_message(&fields);
/// assert!(message.starts_with(
///     "example.com wants you to sign in with your Ethereum account:\n"
/// ));
/// assert!(message.contains("\nChain ID: 1\n"));
/// ```
#[must_use]
pub fn create_siwe_message(fields: &SiweMessageFields) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(16);

    lines.push(format!("{}{HEADER_SUFFIX}", fields.domain));
    lines.push(fields.address.clone());
    lines.push(String::new());
    if let Some(statement) = &fields.statement {
        lines.push(statement.clone());
        lines.push(String::new());
    }
    lines.push(format!("URI: {}", fields.uri));
    lines.push(format!("Version: {}", fields.version));
    lines.push(format!("Chain ID: {}", fields.chain_id));
    lines.push(format!("Nonce: {}", fields.nonce));
    lines.push(format!("Issued At: {}", fields.issued_at));
    if let Some(expiration_time) = &fields.expiration_time {
        lines.push(format!("Expiration Time: {expiration_time}"));
    }
    if let Some(not_before) = &fields.not_before {
        lines.push(format!("Not Before: {not_before}"));
    }
    if let Some(request_id) = &fields.request_id {
        lines.push(format!("Request ID: {request_id}"));
    }
    if let Some(resources) = &fields.resources {
        lines.push("Resources:".to_string());
        for resource in resources {
            lines.push(format!("- {resource}"));
        }
    }

    lines.join("\n")
}

/// Decode an EIP-4361 message string back into typed fields.
///
/// The statement is detected heuristically: the line after the address
/// must be blank and the line after that non-blank and colon-free. A
/// statement that itself contains a colon is therefore not recognized as
/// a statement; this mirrors how the message format is actually
/// ambiguous and is pinned by tests rather than "fixed".
///
/// # Errors
///
/// Returns [`SiweParseError`] for any malformed input; never panics.
pub fn parse_siwe_message(message: &str) -> Result<SiweMessageFields> {
    let lines: Vec<&str> = message.split('\n').collect();
    if lines.len() < 7 {
        return Err(SiweParseError::TooFewLines);
    }

    let domain = lines[0]
        .strip_suffix(HEADER_SUFFIX)
        .filter(|domain| !domain.is_empty())
        .ok_or(SiweParseError::MalformedHeader)?;

    let address = lines[1];
    if !is_valid_ethereum_address(address) {
        return Err(SiweParseError::InvalidAddress);
    }

    // Statement heuristic: blank line, then a non-blank line without a
    // colon. A field line like "URI: ..." always contains one.
    let (statement, body_start) =
        if lines[2].is_empty() && lines.len() > 3 && !lines[3].is_empty() && !lines[3].contains(':')
        {
            (Some(lines[3].to_string()), 4)
        } else {
            (None, 2)
        };

    let mut uri = None;
    let mut version = None;
    let mut chain_id = None;
    let mut nonce = None;
    let mut issued_at = None;
    let mut expiration_time = None;
    let mut not_before = None;
    let mut request_id = None;
    let mut resources: Option<Vec<String>> = None;
    let mut in_resources = false;

    for line in &lines[body_start..] {
        if in_resources {
            if let Some(resource) = line.strip_prefix("- ") {
                resources.get_or_insert_with(Vec::new).push(resource.to_string());
                continue;
            }
            in_resources = false;
        }
        if line.is_empty() {
            continue;
        }
        if *line == "Resources:" {
            in_resources = true;
            resources.get_or_insert_with(Vec::new);
            continue;
        }
        let Some((key, value)) = line.split_once(": ") else {
            continue;
        };
        match key {
            "URI" => uri = Some(value.to_string()),
            "Version" => version = Some(value.to_string()),
            "Chain ID" => {
                let parsed = value
                    .parse::<u64>()
                    .map_err(|_| SiweParseError::InvalidChainId(value.to_string()))?;
                chain_id = Some(parsed);
            }
            "Nonce" => nonce = Some(value.to_string()),
            "Issued At" => issued_at = Some(value.to_string()),
            "Expiration Time" => expiration_time = Some(value.to_string()),
            "Not Before" => not_before = Some(value.to_string()),
            "Request ID" => request_id = Some(value.to_string()),
            _ => {}
        }
    }

    let (Some(uri), Some(version), Some(chain_id), Some(nonce), Some(issued_at)) =
        (uri, version, chain_id, nonce, issued_at)
    else {
        return Err(SiweParseError::MissingRequiredFields);
    };

    Ok(SiweMessageFields {
        domain: domain.to_string(),
        address: address.to_string(),
        statement,
        uri,
        version,
        chain_id,
        nonce,
        issued_at,
        expiration_time,
        not_before,
        request_id,
        resources,
    })
}
