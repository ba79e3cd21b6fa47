//! Authentication events.
//!
//! Events are the only input to the state machine. The surrounding
//! controller translates user gestures, wallet callbacks, network results
//! and timer expiries into these values; the machine itself has no
//! knowledge of where an event came from.

use serde::{Deserialize, Serialize};

/// Input to the auth state machine.
///
/// Each variant carries only the payload needed for its transition;
/// payload fields are never reused across variants with different meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthEvent {
    /// User asked to connect a wallet.
    Connect {
        /// Address hint, when the controller already knows the account.
        address: Option<String>,
    },

    /// The wallet exposed an account.
    Connected {
        /// Selected account address.
        address: String,
        /// Chain identifier as reported by the wallet (e.g. `"0x1"`).
        chain_id: String,
    },

    /// The controller is about to prompt the wallet for a signature.
    RequestSignature,

    /// The wallet produced a signature over the SIWE message.
    SignatureReceived {
        /// Signature bytes as a hex string.
        signature: String,
    },

    /// The server accepted the signature.
    VerificationSuccess {
        /// Session token issued by the server, if any.
        session_token: Option<String>,
    },

    /// The server rejected the signature.
    VerificationFailed {
        /// Human-readable reason, stored opaquely in the context.
        error: String,
    },

    /// User asked to disconnect.
    Disconnect,

    /// The wallet confirmed disconnection.
    Disconnected,

    /// Something failed outside the machine (wallet rejection, network).
    Error {
        /// Human-readable reason, stored opaquely in the context.
        error: String,
    },

    /// Drop everything and return to the initial snapshot.
    Reset,

    /// A timeout scheduled by a previous `StartTimeout` action fired.
    Timeout,
}

impl AuthEvent {
    /// Name of the event variant, used in audit log messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Connect { .. } => "CONNECT",
            Self::Connected { .. } => "CONNECTED",
            Self::RequestSignature => "REQUEST_SIGNATURE",
            Self::SignatureReceived { .. } => "SIGNATURE_RECEIVED",
            Self::VerificationSuccess { .. } => "VERIFICATION_SUCCESS",
            Self::VerificationFailed { .. } => "VERIFICATION_FAILED",
            Self::Disconnect => "DISCONNECT",
            Self::Disconnected => "DISCONNECTED",
            Self::Error { .. } => "ERROR",
            Self::Reset => "RESET",
            Self::Timeout => "TIMEOUT",
        }
    }
}
