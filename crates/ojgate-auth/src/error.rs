/// Why a credential was rejected.
///
/// The variants are for logs only. Callers answering an HTTP request must
/// collapse every variant into one generic message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerificationError {
    /// Not a three-segment token, or a segment/payload failed to decode.
    #[error("malformed token: {0}")]
    Malformed(String),

    /// Header declares an algorithm other than HS256.
    #[error("unexpected signing algorithm: {0}")]
    BadAlgorithm(String),

    #[error("signature mismatch")]
    BadSignature,

    #[error("token expired")]
    Expired,

    /// No usable signing secret is configured.
    #[error("signing secret is not configured")]
    ConfigError,
}

impl VerificationError {
    /// Short stable name for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            VerificationError::Malformed(_) => "malformed",
            VerificationError::BadAlgorithm(_) => "bad_algorithm",
            VerificationError::BadSignature => "bad_signature",
            VerificationError::Expired => "expired",
            VerificationError::ConfigError => "config_error",
        }
    }
}
