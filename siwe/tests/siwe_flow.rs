//! Integration tests for the SIWE flow, driven the way the extension
//! controller uses it: build or receive a message, parse it, validate it
//! against expectations, then hand it to the wallet.

#![allow(clippy::unwrap_used)]

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use wallet_bridge_siwe::{
    Challenge, ChallengeRequest, SiweFieldParams, SiweMessageFields, SiweValidationError,
    ValidateOptions, VerifyRequest, create_siwe_message, parse_siwe_message,
    utils::iso8601_millis, validate_siwe_message,
};

const ADDRESS: &str = "0x1234567890abcdef1234567890abcdef12345678";

fn minimal_fields() -> SiweMessageFields {
    SiweMessageFields {
        domain: "example.com".to_string(),
        address: ADDRESS.to_string(),
        statement: None,
        uri: "https://example.com".to_string(),
        version: "1".to_string(),
        chain_id: 1,
        nonce: "abc123xyz456".to_string(),
        issued_at: "2024-01-01T00:00:00.000Z".to_string(),
        expiration_time: None,
        not_before: None,
        request_id: None,
        resources: None,
    }
}

#[test]
fn test_message_contains_the_exact_expected_lines() {
    let message = create_siwe_message(&minimal_fields());
    let lines: Vec<&str> = message.split('\n').collect();

    assert!(lines.contains(&"example.com wants you to sign in with your Ethereum account:"));
    assert!(lines.contains(&ADDRESS));
    assert!(lines.contains(&"URI: https://example.com"));
    assert!(lines.contains(&"Version: 1"));
    assert!(lines.contains(&"Chain ID: 1"));
    assert!(lines.contains(&"Nonce: abc123xyz456"));
    assert!(lines.contains(&"Issued At: 2024-01-01T00:00:00.000Z"));
}

#[test]
fn test_chain_mismatch_is_reported_with_both_ids() {
    let options = ValidateOptions {
        expected_chain_id: Some(137),
        now: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single(),
        ..ValidateOptions::default()
    };
    let error = validate_siwe_message(&minimal_fields(), &options).unwrap_err();
    assert_eq!(
        error,
        SiweValidationError::ChainIdMismatch { expected: 137, actual: 1 }
    );
    assert!(error.to_string().contains("Chain ID mismatch"));
}

#[test]
fn test_challenge_to_verify_flow() {
    // 1. The wallet reports an account; the controller asks the server
    //    for a challenge.
    let request = ChallengeRequest::new(
        "0x1234567890ABCDEF1234567890abcdef12345678",
        "0x1",
    )
    .unwrap();
    assert_eq!(request.address, ADDRESS);
    assert_eq!(request.chain_id, 1);

    // 2. The server answers with a SIWE message (simulated here).
    let issued = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let fields = SiweFieldParams {
        domain: "example.com".to_string(),
        address: ADDRESS.to_string(),
        uri: "https://example.com".to_string(),
        chain_id: request.chain_id,
        nonce: "abc123xyz456".to_string(),
        issued_at: Some(issued),
        expires_in_minutes: Some(10),
        ..SiweFieldParams::default()
    }
    .into_fields();
    let challenge = Challenge {
        message: create_siwe_message(&fields),
        nonce: fields.nonce.clone(),
        expires_at: issued + Duration::minutes(10),
    };
    assert!(challenge.is_valid_at(issued + Duration::minutes(5)));

    // 3. Before prompting the wallet, the controller re-parses and
    //    validates what the server sent.
    let parsed = parse_siwe_message(&challenge.message).unwrap();
    assert_eq!(parsed, fields);
    let options = ValidateOptions {
        expected_domain: Some("example.com".to_string()),
        expected_address: Some(ADDRESS.to_string()),
        expected_chain_id: Some(1),
        now: Some(issued + Duration::minutes(5)),
    };
    validate_siwe_message(&parsed, &options).unwrap();

    // 4. The signed message goes back verbatim.
    let verify = VerifyRequest::new(challenge.message.clone(), "0xsig");
    assert_eq!(verify.message, challenge.message);
}

// ═══════════════════════════════════════════════════════════════════════
// Properties
// ═══════════════════════════════════════════════════════════════════════

prop_compose! {
    fn arb_address()(hex in "[0-9a-fA-F]{40}") -> String {
        format!("0x{hex}")
    }
}

prop_compose! {
    fn arb_issued_at()(secs in 0i64..4_000_000_000i64) -> String {
        iso8601_millis(Utc.timestamp_opt(secs, 0).single().unwrap_or_default())
    }
}

proptest! {
    /// Serialize → parse reproduces the fields exactly for any message
    /// without a statement or optional fields.
    #[test]
    fn prop_round_trip_minimal_message(
        domain in "[a-z0-9][a-z0-9.-]{0,30}",
        address in arb_address(),
        uri in "https://[a-z0-9./-]{1,40}",
        chain_id in 1u64..1_000_000_000u64,
        nonce in "[a-zA-Z0-9]{8,32}",
        issued_at in arb_issued_at(),
    ) {
        let original = SiweMessageFields {
            domain,
            address,
            statement: None,
            uri,
            version: "1".to_string(),
            chain_id,
            nonce,
            issued_at,
            expiration_time: None,
            not_before: None,
            request_id: None,
            resources: None,
        };
        let parsed = parse_siwe_message(&create_siwe_message(&original));
        prop_assert_eq!(parsed, Ok(original));
    }

    /// Any alphanumeric nonce of at least 8 characters validates; any
    /// shorter one is rejected regardless of the other fields.
    #[test]
    fn prop_nonce_length_rule(nonce in "[a-zA-Z0-9]{1,32}") {
        let fields = SiweMessageFields { nonce: nonce.clone(), ..minimal_fields() };
        let result = validate_siwe_message(&fields, &ValidateOptions::default());
        if nonce.len() >= 8 {
            prop_assert_eq!(result, Ok(()));
        } else {
            prop_assert_eq!(result, Err(SiweValidationError::InvalidNonce));
        }
    }

    /// The message layout keeps the required field lines in EIP-4361
    /// order no matter the payload.
    #[test]
    fn prop_required_field_order_is_stable(
        address in arb_address(),
        chain_id in 1u64..100_000u64,
        nonce in "[a-zA-Z0-9]{8,32}",
    ) {
        let fields = SiweMessageFields {
            address,
            chain_id,
            nonce,
            ..minimal_fields()
        };
        let message = create_siwe_message(&fields);
        let uri_pos = message.find("\nURI: ").unwrap_or(usize::MAX);
        let version_pos = message.find("\nVersion: ").unwrap_or(usize::MAX);
        let chain_pos = message.find("\nChain ID: ").unwrap_or(usize::MAX);
        let nonce_pos = message.find("\nNonce: ").unwrap_or(usize::MAX);
        let issued_pos = message.find("\nIssued At: ").unwrap_or(usize::MAX);
        prop_assert!(uri_pos < version_pos);
        prop_assert!(version_pos < chain_pos);
        prop_assert!(chain_pos < nonce_pos);
        prop_assert!(nonce_pos < issued_pos);
        prop_assert!(issued_pos < usize::MAX);
    }
}
