use thiserror::Error;

/// Error type for JWT operations.
///
/// Verification failures are split into the three categories callers need to
/// tell apart in logs; none of them carries signing details.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,
}
