//! The transition function.
//!
//! `(snapshot, event) → (new snapshot, actions)` — a pure function with no
//! I/O and no failure mode. Events that are not valid for the current
//! state degrade to an audited no-op: the snapshot is returned unchanged
//! together with a single warn-level [`AuthAction::Log`].
//!
//! Every wallet, network and timer failure reaching this module has
//! already been translated by the controller into an [`AuthEvent`]; the
//! machine treats the carried error strings opaquely.

use crate::actions::{AuthAction, LogLevel};
use crate::clock::{Clock, SystemClock};
use crate::constants::{timeout_errors, timeouts};
use crate::events::AuthEvent;
use crate::state::{AuthContext, AuthState, AuthStateData};
use smallvec::{SmallVec, smallvec};

/// Actions emitted by a single transition.
///
/// Four inline slots cover the largest action list any transition emits.
pub type Actions = SmallVec<[AuthAction; 4]>;

/// Result of applying one event: the replacement snapshot plus the side
/// effects the controller must execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The snapshot that supersedes the one passed in.
    pub new_state: AuthStateData,
    /// Side effects to execute, in order.
    pub actions: Actions,
}

/// Whether `event` is accepted in `state`.
///
/// Pure table lookup; total over all state/event pairs.
///
/// # Examples
///
/// ```
/// # use wallet_bridge_auth::{AuthEvent, AuthState, is_valid_transition};
/// assert!(is_valid_transition(AuthState::Idle, &AuthEvent::Connect { address: None }));
/// assert!(!is_valid_transition(AuthState::Idle, &AuthEvent::Timeout));
/// ```
#[must_use]
pub fn is_valid_transition(state: AuthState, event: &AuthEvent) -> bool {
    use AuthEvent as E;
    match state {
        AuthState::Idle => matches!(event, E::Connect { .. } | E::Reset),
        AuthState::Connecting => matches!(
            event,
            E::Connected { .. } | E::Error { .. } | E::Timeout | E::Disconnect | E::Reset
        ),
        AuthState::Signing => matches!(
            event,
            E::SignatureReceived { .. } | E::Error { .. } | E::Timeout | E::Disconnect | E::Reset
        ),
        AuthState::Verifying => matches!(
            event,
            E::VerificationSuccess { .. }
                | E::VerificationFailed { .. }
                | E::Timeout
                | E::Disconnect
                | E::Reset
        ),
        AuthState::Authenticated => matches!(event, E::Disconnect | E::Reset | E::Error { .. }),
        AuthState::Error => matches!(event, E::Connect { .. } | E::Reset | E::Disconnect),
        AuthState::Disconnecting => {
            matches!(event, E::Disconnected | E::Timeout | E::Error { .. } | E::Reset)
        }
    }
}

/// Apply `event` to `current`, stamping connect attempts with the system
/// clock.
///
/// See [`transition_with_clock`] for the deterministic core.
#[must_use]
pub fn transition(current: &AuthStateData, event: AuthEvent) -> Transition {
    transition_with_clock(current, event, &SystemClock)
}

/// Apply `event` to `current`.
///
/// Pure given `clock`: the same inputs always produce the same output, and
/// `current` is never mutated. Invalid events return an unchanged snapshot
/// plus one warn-level log action.
#[must_use]
pub fn transition_with_clock(
    current: &AuthStateData,
    event: AuthEvent,
    clock: &impl Clock,
) -> Transition {
    if !is_valid_transition(current.state, &event) {
        return rejected(current, &event);
    }

    match current.state {
        AuthState::Idle => on_idle(current, event, clock),
        AuthState::Connecting => on_connecting(current, event),
        AuthState::Signing => on_signing(current, event),
        AuthState::Verifying => on_verifying(current, event),
        AuthState::Authenticated => on_authenticated(current, event),
        AuthState::Error => on_error(current, event, clock),
        AuthState::Disconnecting => on_disconnecting(current, event),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Per-state handlers
// ═══════════════════════════════════════════════════════════════════════

fn on_idle(current: &AuthStateData, event: AuthEvent, clock: &impl Clock) -> Transition {
    match event {
        AuthEvent::Connect { address } => start_connect(current, address, clock),
        AuthEvent::Reset => full_reset(current, smallvec![AuthAction::ClearSession]),
        other => rejected(current, &other),
    }
}

fn on_connecting(current: &AuthStateData, event: AuthEvent) -> Transition {
    match event {
        AuthEvent::Connected { address, chain_id } => Transition {
            new_state: next(
                current,
                AuthState::Signing,
                AuthContext {
                    address: Some(address),
                    chain_id: Some(chain_id),
                    ..current.context.clone()
                },
            ),
            actions: smallvec![
                AuthAction::CancelTimeout,
                AuthAction::StartTimeout { duration: timeouts::SIGNING },
            ],
        },
        AuthEvent::Error { error } => fail(
            current,
            error,
            smallvec![AuthAction::CancelTimeout],
        ),
        AuthEvent::Timeout => fail(
            current,
            timeout_errors::CONNECTION.to_string(),
            SmallVec::new(),
        ),
        AuthEvent::Disconnect | AuthEvent::Reset => full_reset(
            current,
            smallvec![AuthAction::CancelTimeout, AuthAction::ClearSession],
        ),
        other => rejected(current, &other),
    }
}

fn on_signing(current: &AuthStateData, event: AuthEvent) -> Transition {
    match event {
        AuthEvent::SignatureReceived { signature } => Transition {
            new_state: next(
                current,
                AuthState::Verifying,
                AuthContext {
                    signature: Some(signature),
                    ..current.context.clone()
                },
            ),
            actions: smallvec![
                AuthAction::CancelTimeout,
                AuthAction::StartTimeout { duration: timeouts::VERIFY },
            ],
        },
        AuthEvent::Error { error } => fail(current, error, SmallVec::new()),
        AuthEvent::Timeout => fail(
            current,
            timeout_errors::SIGNATURE.to_string(),
            SmallVec::new(),
        ),
        AuthEvent::Disconnect | AuthEvent::Reset => full_reset(
            current,
            smallvec![AuthAction::CancelTimeout, AuthAction::ClearSession],
        ),
        other => rejected(current, &other),
    }
}

fn on_verifying(current: &AuthStateData, event: AuthEvent) -> Transition {
    match event {
        AuthEvent::VerificationSuccess { session_token } => Transition {
            new_state: next(
                current,
                AuthState::Authenticated,
                AuthContext {
                    session_token,
                    ..current.context.clone()
                },
            ),
            actions: smallvec![
                AuthAction::CancelTimeout,
                AuthAction::SaveSession,
                AuthAction::NotifyConnected,
            ],
        },
        AuthEvent::VerificationFailed { error } => fail(current, error, SmallVec::new()),
        AuthEvent::Timeout => fail(
            current,
            timeout_errors::VERIFICATION.to_string(),
            SmallVec::new(),
        ),
        AuthEvent::Disconnect | AuthEvent::Reset => full_reset(
            current,
            smallvec![AuthAction::CancelTimeout, AuthAction::ClearSession],
        ),
        other => rejected(current, &other),
    }
}

fn on_authenticated(current: &AuthStateData, event: AuthEvent) -> Transition {
    match event {
        AuthEvent::Disconnect => Transition {
            new_state: next(current, AuthState::Disconnecting, current.context.clone()),
            actions: smallvec![AuthAction::StartTimeout { duration: timeouts::DISCONNECT }],
        },
        AuthEvent::Reset => full_reset(
            current,
            smallvec![AuthAction::ClearSession, AuthAction::NotifyDisconnected],
        ),
        AuthEvent::Error { error } => Transition {
            new_state: next(
                current,
                AuthState::Error,
                AuthContext {
                    error: Some(error.clone()),
                    ..current.context.clone()
                },
            ),
            actions: smallvec![
                AuthAction::ClearSession,
                AuthAction::NotifyError { error },
            ],
        },
        other => rejected(current, &other),
    }
}

fn on_error(current: &AuthStateData, event: AuthEvent, clock: &impl Clock) -> Transition {
    match event {
        // Retry starts the wallet handshake from scratch: the context is
        // rebuilt fresh, keeping only the incremented attempt count.
        AuthEvent::Connect { address } => start_connect(
            &AuthStateData {
                state: current.state,
                context: AuthContext {
                    attempt_count: current.context.attempt_count,
                    ..AuthContext::initial()
                },
                previous_state: current.previous_state,
            },
            address,
            clock,
        ),
        AuthEvent::Reset | AuthEvent::Disconnect => {
            full_reset(current, smallvec![AuthAction::ClearSession])
        }
        other => rejected(current, &other),
    }
}

fn on_disconnecting(current: &AuthStateData, event: AuthEvent) -> Transition {
    match event {
        AuthEvent::Disconnected | AuthEvent::Timeout => full_reset(
            current,
            smallvec![AuthAction::ClearSession, AuthAction::NotifyDisconnected],
        ),
        // A wallet error during teardown still lands in idle: there is
        // nothing left worth diagnosing once the user asked to leave.
        AuthEvent::Error { error } => full_reset(
            current,
            smallvec![
                AuthAction::CancelTimeout,
                AuthAction::ClearSession,
                AuthAction::Log {
                    message: format!("Error while disconnecting (ignored): {error}"),
                    level: LogLevel::Warn,
                },
            ],
        ),
        AuthEvent::Reset => full_reset(
            current,
            smallvec![AuthAction::CancelTimeout, AuthAction::ClearSession],
        ),
        other => rejected(current, &other),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Shared transition builders
// ═══════════════════════════════════════════════════════════════════════

/// Replacement snapshot moving to `state`, recording one level of history.
fn next(current: &AuthStateData, state: AuthState, context: AuthContext) -> AuthStateData {
    AuthStateData {
        state,
        context,
        previous_state: Some(current.state),
    }
}

/// Begin a connect attempt from `Idle` or a retry from `Error`.
fn start_connect(
    current: &AuthStateData,
    address: Option<String>,
    clock: &impl Clock,
) -> Transition {
    Transition {
        new_state: next(
            current,
            AuthState::Connecting,
            AuthContext {
                address,
                timestamp: Some(clock.now_ms()),
                attempt_count: current.context.attempt_count + 1,
                ..current.context.clone()
            },
        ),
        actions: smallvec![AuthAction::StartTimeout { duration: timeouts::CONNECT }],
    }
}

/// Move to `Error` with `error` stored and surfaced; `extra` actions
/// (timer cleanup) run before the notification.
fn fail(current: &AuthStateData, error: String, extra: Actions) -> Transition {
    let mut actions = extra;
    actions.push(AuthAction::NotifyError { error: error.clone() });
    Transition {
        new_state: next(
            current,
            AuthState::Error,
            AuthContext {
                error: Some(error),
                ..current.context.clone()
            },
        ),
        actions,
    }
}

/// Return to `Idle` with a fresh context.
fn full_reset(current: &AuthStateData, actions: Actions) -> Transition {
    Transition {
        new_state: next(current, AuthState::Idle, AuthContext::initial()),
        actions,
    }
}

/// Audited no-op for an event the current state does not accept.
fn rejected(current: &AuthStateData, event: &AuthEvent) -> Transition {
    let message = format!(
        "Rejected event {} in state {:?}",
        event.kind(),
        current.state
    );
    tracing::warn!(event = event.kind(), state = ?current.state, "rejected transition");
    Transition {
        new_state: current.clone(),
        actions: smallvec![AuthAction::Log { message, level: LogLevel::Warn }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    const NOW: FixedClock = FixedClock(1_704_067_200_000);

    fn connect() -> AuthEvent {
        AuthEvent::Connect { address: None }
    }

    #[test]
    fn test_idle_connect_starts_attempt() {
        let result = transition_with_clock(&AuthStateData::initial(), connect(), &NOW);
        assert_eq!(result.new_state.state, AuthState::Connecting);
        assert_eq!(result.new_state.context.attempt_count, 1);
        assert_eq!(result.new_state.context.timestamp, Some(NOW.0));
        assert_eq!(result.new_state.previous_state, Some(AuthState::Idle));
        assert_eq!(
            result.actions.as_slice(),
            [AuthAction::StartTimeout { duration: timeouts::CONNECT }]
        );
    }

    #[test]
    fn test_idle_connect_keeps_address_hint() {
        let event = AuthEvent::Connect {
            address: Some("0xfeed".to_string()),
        };
        let result = transition_with_clock(&AuthStateData::initial(), event, &NOW);
        assert_eq!(result.new_state.context.address.as_deref(), Some("0xfeed"));
    }

    #[test]
    fn test_connecting_connected_moves_to_signing() {
        let connecting =
            transition_with_clock(&AuthStateData::initial(), connect(), &NOW).new_state;
        let result = transition_with_clock(
            &connecting,
            AuthEvent::Connected {
                address: "0xabc".to_string(),
                chain_id: "0x1".to_string(),
            },
            &NOW,
        );
        assert_eq!(result.new_state.state, AuthState::Signing);
        assert_eq!(result.new_state.context.address.as_deref(), Some("0xabc"));
        assert_eq!(result.new_state.context.chain_id.as_deref(), Some("0x1"));
        assert_eq!(
            result.actions.as_slice(),
            [
                AuthAction::CancelTimeout,
                AuthAction::StartTimeout { duration: timeouts::SIGNING },
            ]
        );
    }

    #[test]
    fn test_connecting_timeout_sets_fixed_error() {
        let connecting =
            transition_with_clock(&AuthStateData::initial(), connect(), &NOW).new_state;
        let result = transition_with_clock(&connecting, AuthEvent::Timeout, &NOW);
        assert_eq!(result.new_state.state, AuthState::Error);
        assert_eq!(
            result.new_state.context.error.as_deref(),
            Some("Connection timeout")
        );
        assert_eq!(
            result.actions.as_slice(),
            [AuthAction::NotifyError { error: "Connection timeout".to_string() }]
        );
    }

    #[test]
    fn test_connecting_error_cancels_timer() {
        let connecting =
            transition_with_clock(&AuthStateData::initial(), connect(), &NOW).new_state;
        let result = transition_with_clock(
            &connecting,
            AuthEvent::Error { error: "User rejected the request".to_string() },
            &NOW,
        );
        assert_eq!(result.new_state.state, AuthState::Error);
        assert_eq!(result.actions[0], AuthAction::CancelTimeout);
        assert!(matches!(result.actions[1], AuthAction::NotifyError { .. }));
    }

    #[test]
    fn test_retry_from_error_rebuilds_context() {
        let mut snapshot = AuthStateData::initial();
        snapshot = transition_with_clock(&snapshot, connect(), &NOW).new_state;
        snapshot = transition_with_clock(&snapshot, AuthEvent::Timeout, &NOW).new_state;
        assert_eq!(snapshot.state, AuthState::Error);

        let result = transition_with_clock(&snapshot, connect(), &NOW);
        assert_eq!(result.new_state.state, AuthState::Connecting);
        assert_eq!(result.new_state.context.attempt_count, 2);
        assert!(result.new_state.context.error.is_none());
        assert!(result.new_state.context.signature.is_none());
        assert!(result.new_state.context.session_token.is_none());
    }

    #[test]
    fn test_authenticated_error_clears_session() {
        let snapshot = AuthStateData {
            state: AuthState::Authenticated,
            context: AuthContext {
                session_token: Some("tok".to_string()),
                ..AuthContext::initial()
            },
            previous_state: Some(AuthState::Verifying),
        };
        let result = transition_with_clock(
            &snapshot,
            AuthEvent::Error { error: "session revoked".to_string() },
            &NOW,
        );
        assert_eq!(result.new_state.state, AuthState::Error);
        assert_eq!(result.actions[0], AuthAction::ClearSession);
    }

    #[test]
    #[allow(clippy::panic)]
    fn test_invalid_event_is_logged_noop() {
        let idle = AuthStateData::initial();
        let result = transition_with_clock(&idle, AuthEvent::Timeout, &NOW);
        assert_eq!(result.new_state, idle);
        assert_eq!(result.actions.len(), 1);
        match &result.actions[0] {
            AuthAction::Log { message, level } => {
                assert_eq!(*level, LogLevel::Warn);
                assert!(message.contains("TIMEOUT"));
                assert!(message.contains("Idle"));
            }
            other => panic!("expected Log action, got {other:?}"),
        }
    }

    #[test]
    fn test_request_signature_is_never_accepted() {
        // The controller emits REQUEST_SIGNATURE around its own prompt
        // bookkeeping; no state consumes it.
        for state in [
            AuthState::Idle,
            AuthState::Connecting,
            AuthState::Signing,
            AuthState::Verifying,
            AuthState::Authenticated,
            AuthState::Error,
            AuthState::Disconnecting,
        ] {
            assert!(!is_valid_transition(state, &AuthEvent::RequestSignature));
        }
    }
}
