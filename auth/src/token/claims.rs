use serde::Deserialize;
use serde::Serialize;

/// JWT claim set carried by both access and refresh tokens.
///
/// `exp` is an absolute Unix timestamp, not a duration, so verification can
/// compare it against "now" independently of when decoding happens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (the user's email)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    pub fn new(subject: impl ToString, expires_at: i64) -> Self {
        Self {
            sub: subject.to_string(),
            exp: expires_at,
        }
    }
}
