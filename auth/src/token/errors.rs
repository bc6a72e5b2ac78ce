use thiserror::Error;

/// Error type for token operations.
///
/// The three verification kinds are distinguished for logging; callers are
/// expected to collapse all of them into the same access-denied response.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    BadSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Failed to sign token: {0}")]
    Signing(String),
}
