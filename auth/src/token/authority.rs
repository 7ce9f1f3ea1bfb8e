use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Which of the two token kinds a token was minted for.
///
/// The purpose determines the signing key and the TTL. An access token can
/// never be verified as a refresh token or vice versa because the keys
/// differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPurpose {
    /// Short-lived credential authorizing ordinary requests
    Access,
    /// Longer-lived credential authorizing only issuance of a new access token
    Refresh,
}

impl TokenPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenPurpose::Access => "access",
            TokenPurpose::Refresh => "refresh",
        }
    }
}

/// Signing material for one token purpose.
struct PurposeKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl PurposeKeys {
    fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// Issues and verifies access and refresh tokens.
///
/// Holds two independent HMAC secrets, one per purpose, and the per-purpose
/// TTLs. Built once at startup from configuration and shared read-only
/// across requests; issuance and verification are pure functions of
/// (subject, time, keys).
pub struct TokenAuthority {
    access: PurposeKeys,
    refresh: PurposeKeys,
    access_ttl: Duration,
    refresh_ttl: Duration,
    algorithm: Algorithm,
}

impl TokenAuthority {
    /// Create a token authority from configured secrets and TTLs.
    ///
    /// # Arguments
    /// * `access_secret` - Secret signing the access tokens
    /// * `refresh_secret` - Secret signing the refresh tokens
    /// * `algorithm` - Signing algorithm name (HMAC family, e.g. "HS256")
    /// * `access_ttl` - Access token lifetime
    /// * `refresh_ttl` - Refresh token lifetime
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Unknown or non-HMAC algorithm name
    /// * `SharedSecret` - The two secrets are identical; sharing a key
    ///   across purposes would let a refresh token pass as an access token
    pub fn new(
        access_secret: &[u8],
        refresh_secret: &[u8],
        algorithm: &str,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Result<Self, TokenError> {
        let parsed: Algorithm = algorithm
            .parse()
            .map_err(|_| TokenError::UnsupportedAlgorithm(algorithm.to_string()))?;

        if !matches!(
            parsed,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(TokenError::UnsupportedAlgorithm(algorithm.to_string()));
        }

        if access_secret == refresh_secret {
            return Err(TokenError::SharedSecret);
        }

        Ok(Self {
            access: PurposeKeys::from_secret(access_secret),
            refresh: PurposeKeys::from_secret(refresh_secret),
            access_ttl,
            refresh_ttl,
            algorithm: parsed,
        })
    }

    fn keys(&self, purpose: TokenPurpose) -> &PurposeKeys {
        match purpose {
            TokenPurpose::Access => &self.access,
            TokenPurpose::Refresh => &self.refresh,
        }
    }

    fn ttl(&self, purpose: TokenPurpose) -> Duration {
        match purpose {
            TokenPurpose::Access => self.access_ttl,
            TokenPurpose::Refresh => self.refresh_ttl,
        }
    }

    /// Issue a signed token for the given purpose.
    ///
    /// Sets `exp = now + ttl(purpose)` as an absolute timestamp and signs
    /// with the purpose's key.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(
        &self,
        purpose: TokenPurpose,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(subject, (now + self.ttl(purpose)).timestamp());
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.keys(purpose).encoding)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Issue an access token for `subject`, expiring at `now + access_ttl`.
    pub fn issue_access_token(
        &self,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        self.issue(TokenPurpose::Access, subject, now)
    }

    /// Issue a refresh token for `subject`, expiring at `now + refresh_ttl`.
    pub fn issue_refresh_token(
        &self,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        self.issue(TokenPurpose::Refresh, subject, now)
    }

    /// Decode and validate a token presented for the given purpose.
    ///
    /// Signature and structure are checked against the purpose's key; the
    /// `exp` claim is checked against the current time with zero leeway.
    ///
    /// # Errors
    /// * `TokenExpired` - Signature is valid but `exp` is in the past
    /// * `InvalidToken` - Signature mismatch or malformed structure
    pub fn verify(&self, purpose: TokenPurpose, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        decode::<Claims>(token, &self.keys(purpose).decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                _ => TokenError::InvalidToken(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCESS_SECRET: &[u8] = b"access_secret_at_least_32_bytes!!";
    const REFRESH_SECRET: &[u8] = b"refresh_secret_at_least_32_bytes!";

    fn authority() -> TokenAuthority {
        TokenAuthority::new(
            ACCESS_SECRET,
            REFRESH_SECRET,
            "HS256",
            Duration::minutes(15),
            Duration::minutes(60 * 24 * 7),
        )
        .expect("Failed to build authority")
    }

    #[test]
    fn test_issue_and_verify_access_token() {
        let authority = authority();
        let now = Utc::now();

        let token = authority
            .issue_access_token("user@example.com", now)
            .expect("Failed to issue token");

        let claims = authority
            .verify(TokenPurpose::Access, &token)
            .expect("Failed to verify token");

        assert_eq!(claims.sub, "user@example.com");
        assert_eq!(claims.exp, now.timestamp() + 15 * 60);
    }

    #[test]
    fn test_refresh_token_uses_refresh_ttl() {
        let authority = authority();
        let now = Utc::now();

        let token = authority
            .issue_refresh_token("user@example.com", now)
            .expect("Failed to issue token");

        let claims = authority
            .verify(TokenPurpose::Refresh, &token)
            .expect("Failed to verify token");

        assert_eq!(claims.exp, now.timestamp() + 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_cross_purpose_rejection() {
        let authority = authority();
        let now = Utc::now();

        let access = authority.issue_access_token("user@example.com", now).unwrap();
        let refresh = authority.issue_refresh_token("user@example.com", now).unwrap();

        // An access token presented as a refresh token, and vice versa
        assert!(matches!(
            authority.verify(TokenPurpose::Refresh, &access),
            Err(TokenError::InvalidToken(_))
        ));
        assert!(matches!(
            authority.verify(TokenPurpose::Access, &refresh),
            Err(TokenError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let authority = authority();
        // Issued far enough in the past that the access TTL has elapsed
        let issued_at = Utc::now() - Duration::minutes(30);

        let token = authority
            .issue_access_token("user@example.com", issued_at)
            .unwrap();

        assert!(matches!(
            authority.verify(TokenPurpose::Access, &token),
            Err(TokenError::TokenExpired)
        ));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let authority = authority();
        let other = TokenAuthority::new(
            b"other_access_secret_32_bytes_long",
            b"other_refresh_secret_32_bytes_lng",
            "HS256",
            Duration::minutes(15),
            Duration::minutes(60),
        )
        .unwrap();

        let token = authority
            .issue_access_token("user@example.com", Utc::now())
            .unwrap();

        assert!(matches!(
            other.verify(TokenPurpose::Access, &token),
            Err(TokenError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_verify_malformed_token() {
        let authority = authority();

        assert!(matches!(
            authority.verify(TokenPurpose::Access, "not.a.token"),
            Err(TokenError::InvalidToken(_))
        ));
        assert!(matches!(
            authority.verify(TokenPurpose::Access, ""),
            Err(TokenError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_shared_secret_rejected() {
        let result = TokenAuthority::new(
            ACCESS_SECRET,
            ACCESS_SECRET,
            "HS256",
            Duration::minutes(15),
            Duration::minutes(60),
        );

        assert!(matches!(result, Err(TokenError::SharedSecret)));
    }

    #[test]
    fn test_unsupported_algorithm_rejected() {
        for name in ["RS256", "none", "hs256"] {
            let result = TokenAuthority::new(
                ACCESS_SECRET,
                REFRESH_SECRET,
                name,
                Duration::minutes(15),
                Duration::minutes(60),
            );
            assert!(
                matches!(result, Err(TokenError::UnsupportedAlgorithm(_))),
                "algorithm {name:?} should be rejected"
            );
        }
    }
}
