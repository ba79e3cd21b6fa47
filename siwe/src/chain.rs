//! Chain identifier helpers.
//!
//! Wallets report chain ids as `0x`-prefixed hex strings
//! (`eth_chainId`), servers speak decimal integers. These helpers convert
//! between the two and name the well-known networks.

use crate::error::ChainIdError;

/// Parse a chain identifier from either `0x`-hex or plain decimal.
///
/// # Examples
///
/// ```
/// use wallet_bridge_siwe::chain::hex_to_chain_id;
///
/// assert_eq!(hex_to_chain_id("0x1"), Ok(1));
/// assert_eq!(hex_to_chain_id("0x89"), Ok(137));
/// assert_eq!(hex_to_chain_id("137"), Ok(137));
/// assert!(hex_to_chain_id("mainnet").is_err());
/// ```
///
/// # Errors
///
/// Returns [`ChainIdError`] when the input is neither hex nor decimal.
pub fn hex_to_chain_id(value: &str) -> Result<u64, ChainIdError> {
    let trimmed = value.trim();
    let parsed = if let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else {
        trimmed.parse::<u64>()
    };
    parsed.map_err(|_| ChainIdError(value.to_string()))
}

/// Format a chain id the way wallets report it: `0x`-prefixed lowercase
/// hex.
///
/// # Examples
///
/// ```
/// use wallet_bridge_siwe::chain::chain_id_to_hex;
///
/// assert_eq!(chain_id_to_hex(1), "0x1");
/// assert_eq!(chain_id_to_hex(137), "0x89");
/// ```
#[must_use]
pub fn chain_id_to_hex(chain_id: u64) -> String {
    format!("0x{chain_id:x}")
}

/// Human-readable name for a chain id.
///
/// Well-known networks get their proper name; everything else falls back
/// to `Chain {id}`.
#[must_use]
pub fn chain_name(chain_id: u64) -> String {
    match chain_id {
        1 => "Ethereum Mainnet".to_string(),
        10 => "Optimism".to_string(),
        56 => "BNB Smart Chain".to_string(),
        100 => "Gnosis".to_string(),
        137 => "Polygon".to_string(),
        8453 => "Base".to_string(),
        42161 => "Arbitrum One".to_string(),
        43114 => "Avalanche".to_string(),
        11_155_111 => "Sepolia".to_string(),
        other => format!("Chain {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(hex_to_chain_id("0x1"), Ok(1));
        assert_eq!(hex_to_chain_id("0xa"), Ok(10));
        assert_eq!(hex_to_chain_id("0X89"), Ok(137));
        assert_eq!(hex_to_chain_id("0xaa36a7"), Ok(11_155_111));
    }

    #[test]
    fn test_decimal_parsing() {
        assert_eq!(hex_to_chain_id("1"), Ok(1));
        assert_eq!(hex_to_chain_id("42161"), Ok(42161));
        assert_eq!(hex_to_chain_id(" 137 "), Ok(137));
    }

    #[test]
    fn test_chain_zero_passes_through() {
        // Conversions accept any u64; positivity is not enforced here and
        // 0 round-trips like any other id.
        assert_eq!(hex_to_chain_id("0x0"), Ok(0));
        assert_eq!(hex_to_chain_id("0"), Ok(0));
        assert_eq!(chain_id_to_hex(0), "0x0");
    }

    #[test]
    fn test_invalid_chain_ids() {
        assert_eq!(hex_to_chain_id(""), Err(ChainIdError(String::new())));
        assert!(hex_to_chain_id("0x").is_err());
        assert!(hex_to_chain_id("mainnet").is_err());
        assert!(hex_to_chain_id("-1").is_err());
    }

    #[test]
    fn test_round_trip() {
        for chain_id in [1, 10, 137, 8453, 42161, 11_155_111] {
            assert_eq!(hex_to_chain_id(&chain_id_to_hex(chain_id)), Ok(chain_id));
        }
    }

    #[test]
    fn test_known_chain_names() {
        assert_eq!(chain_name(1), "Ethereum Mainnet");
        assert_eq!(chain_name(137), "Polygon");
        assert_eq!(chain_name(11_155_111), "Sepolia");
    }

    #[test]
    fn test_unknown_chain_falls_back_to_id() {
        assert_eq!(chain_name(31337), "Chain 31337");
    }
}
