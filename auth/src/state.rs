//! Authentication state types.
//!
//! This module defines the state snapshot managed by the wallet auth state
//! machine. All types are `Clone` and replaced wholesale on every
//! transition; nothing here is ever mutated in place.

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// State Enumeration
// ═══════════════════════════════════════════════════════════════════════

/// Current phase of the wallet authentication lifecycle.
///
/// Exactly one state is current at a time. `Idle` is the initial state;
/// `Authenticated` and `Error` are terminal resting points (no further
/// event is required, but both remain reactive to new events).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthState {
    /// No authentication in progress.
    Idle,
    /// Waiting for the wallet to expose an account.
    Connecting,
    /// Waiting for the user to sign the SIWE challenge.
    Signing,
    /// Waiting for the server to verify the signature.
    Verifying,
    /// Session established.
    Authenticated,
    /// Authentication failed; `context.error` holds the diagnosis.
    Error,
    /// Tearing down an established session.
    Disconnecting,
}

impl AuthState {
    /// Human-readable description of the state, for diagnostics and UI.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Idle => "Not connected",
            Self::Connecting => "Connecting to wallet",
            Self::Signing => "Waiting for signature",
            Self::Verifying => "Verifying signature",
            Self::Authenticated => "Authenticated",
            Self::Error => "Authentication error",
            Self::Disconnecting => "Disconnecting",
        }
    }

    /// `true` for the resting states that require no further event.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wallet_bridge_auth::AuthState;
    /// assert!(AuthState::Authenticated.is_terminal());
    /// assert!(AuthState::Error.is_terminal());
    /// assert!(!AuthState::Connecting.is_terminal());
    /// ```
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Authenticated | Self::Error)
    }

    /// `true` only when a session is established.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Authenticated)
    }

    /// `true` while an asynchronous step is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(
            self,
            Self::Connecting | Self::Signing | Self::Verifying | Self::Disconnecting
        )
    }
}

impl std::fmt::Display for AuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Context
// ═══════════════════════════════════════════════════════════════════════

/// Accumulated data for the current authentication attempt.
///
/// The context travels with the state and is replaced (never mutated) on
/// every transition. `attempt_count` is monotonic across connect attempts
/// and drops back to zero only on a full reset to [`AuthState::Idle`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    /// Wallet account address (`0x`-prefixed hex).
    pub address: Option<String>,

    /// Chain identifier as reported by the wallet (e.g. `"0x1"`).
    pub chain_id: Option<String>,

    /// Signature produced by the wallet over the SIWE message.
    pub signature: Option<String>,

    /// Session token issued by the server after verification.
    pub session_token: Option<String>,

    /// Human-readable error message, opaque to the state machine.
    pub error: Option<String>,

    /// Server-issued nonce for the current challenge.
    pub nonce: Option<String>,

    /// When the current attempt started, in milliseconds since epoch.
    pub timestamp: Option<i64>,

    /// Number of connect attempts since the last full reset.
    pub attempt_count: u32,
}

impl AuthContext {
    /// Fresh context: every field unset, `attempt_count` zero.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            address: None,
            chain_id: None,
            signature: None,
            session_token: None,
            error: None,
            nonce: None,
            timestamp: None,
            attempt_count: 0,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Snapshot
// ═══════════════════════════════════════════════════════════════════════

/// Full immutable snapshot of the auth machine.
///
/// `previous_state` records a single level of history, used for
/// diagnostics only (not multi-step undo).
///
/// # Examples
///
/// ```
/// # use wallet_bridge_auth::{AuthState, AuthStateData};
/// let snapshot = AuthStateData::initial();
/// assert_eq!(snapshot.state, AuthState::Idle);
/// assert_eq!(snapshot.context.attempt_count, 0);
/// assert!(snapshot.previous_state.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStateData {
    /// Current state.
    pub state: AuthState,

    /// Data accumulated by the current attempt.
    pub context: AuthContext,

    /// The state immediately prior to `state`, if any.
    pub previous_state: Option<AuthState>,
}

impl AuthStateData {
    /// The snapshot the controller starts from: idle with a fresh context.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            state: AuthState::Idle,
            context: AuthContext::initial(),
            previous_state: None,
        }
    }
}

impl Default for AuthStateData {
    fn default() -> Self {
        Self::initial()
    }
}
