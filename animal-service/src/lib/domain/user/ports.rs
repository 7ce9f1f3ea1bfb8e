use async_trait::async_trait;
use auth::TokenPurpose;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::AuthenticatedUser;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::TokenPair;
use crate::domain::user::models::User;

/// Port for authentication domain operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// Hashes the password and persists the credential. Accounts are
    /// auto-verified at signup; there is no email-confirmation flow.
    ///
    /// # Arguments
    /// * `command` - Validated command containing email and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `DuplicateAccount` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn signup(&self, command: SignupCommand) -> Result<User, AuthError>;

    /// Verify credentials and mint an access + refresh token pair.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password; the two
    ///   cases share one error
    /// * `UnverifiedAccount` - Account exists but is not verified
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, email: &EmailAddress, password: &str) -> Result<TokenPair, AuthError>;

    /// Exchange a refresh token for a new access token.
    ///
    /// The presented token is authorized with refresh purpose; on success a
    /// new access token is issued. Refresh tokens are not rotated.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature mismatch or malformed token
    /// * `TokenExpired` - Refresh token has expired
    /// * `UserNotFound` - Token subject no longer exists
    async fn refresh(&self, token: &str) -> Result<String, AuthError>;

    /// Authorize a bearer token presented for the given purpose.
    ///
    /// Decodes and validates the token against the purpose's key, checks
    /// expiry, then resolves the subject claim to a persisted user through
    /// one directory lookup (no retry).
    ///
    /// # Returns
    /// The resolved authenticated identity
    ///
    /// # Errors
    /// * `InvalidToken` - Signature mismatch or malformed token
    /// * `TokenExpired` - Token has expired
    /// * `UserNotFound` - No user record for the subject claim
    async fn authorize(
        &self,
        token: &str,
        purpose: TokenPurpose,
    ) -> Result<AuthenticatedUser, AuthError>;
}

/// Persistence operations for user credentials (the user directory).
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `DuplicateAccount` - Email uniqueness constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// Retrieve a user by canonical (lower-cased) email.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;
}
