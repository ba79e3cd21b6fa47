//! # Wallet Bridge Auth
//!
//! Finite-state machine for the wallet connect → challenge → sign →
//! verify → session lifecycle of a browser-extension wallet bridge.
//!
//! ## Architecture
//!
//! The machine is a functional core with an imperative shell it never
//! sees:
//!
//! ```text
//! Event → transition → (Snapshot, Actions) → controller executes actions
//! ```
//!
//! - [`AuthStateData`] is an immutable snapshot, replaced wholesale on
//!   every event.
//! - [`AuthEvent`] values are built by the surrounding controller from
//!   wallet callbacks, network results and timer expiries.
//! - [`AuthAction`] values describe side effects (storage writes,
//!   notifications, timers); the machine performs no I/O itself.
//!
//! Invalid events are not errors: [`transition`] returns the snapshot
//! unchanged plus a warn-level log action, and never panics.
//!
//! ## Example
//!
//! ```
//! use wallet_bridge_auth::{AuthAction, AuthEvent, AuthState, AuthStateData, transition};
//!
//! let idle = AuthStateData::initial();
//! let result = transition(&idle, AuthEvent::Connect { address: None });
//!
//! assert_eq!(result.new_state.state, AuthState::Connecting);
//! assert_eq!(result.new_state.context.attempt_count, 1);
//! assert!(matches!(result.actions[0], AuthAction::StartTimeout { .. }));
//! // The original snapshot is untouched.
//! assert_eq!(idle.state, AuthState::Idle);
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

// Public modules
pub mod actions;
pub mod clock;
pub mod constants;
pub mod events;
pub mod state;
pub mod transitions;

// Re-export main types for convenience
pub use actions::{AuthAction, LogLevel};
pub use clock::{Clock, FixedClock, SystemClock};
pub use events::AuthEvent;
pub use state::{AuthContext, AuthState, AuthStateData};
pub use transitions::{Actions, Transition, is_valid_transition, transition, transition_with_clock};
