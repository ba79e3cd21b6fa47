//! Authentication constants.

/// Timeout budgets for each pending state, enacted by the controller via
/// [`StartTimeout`](crate::AuthAction::StartTimeout) actions.
pub mod timeouts {
    use std::time::Duration;

    /// Waiting for the wallet to expose an account.
    pub const CONNECT: Duration = Duration::from_millis(30_000);

    /// Waiting for the user to approve the signature prompt.
    pub const SIGNING: Duration = Duration::from_millis(60_000);

    /// Waiting for the server to verify the signature.
    pub const VERIFY: Duration = Duration::from_millis(30_000);

    /// Waiting for the wallet to confirm disconnection.
    pub const DISCONNECT: Duration = Duration::from_millis(10_000);
}

/// Fixed error strings stored in the context when a pending state times out.
pub mod timeout_errors {
    /// `Connecting` expired.
    pub const CONNECTION: &str = "Connection timeout";

    /// `Signing` expired.
    pub const SIGNATURE: &str = "Signature timeout";

    /// `Verifying` expired.
    pub const VERIFICATION: &str = "Verification timeout";
}
