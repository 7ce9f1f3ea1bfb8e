use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenAuthority;
use auth::TokenPurpose;
use chrono::Utc;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::AuthenticatedUser;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::TokenPair;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::UserRepository;

/// Domain service implementation for authentication operations.
///
/// Coordinates the password hasher, the token authority, and the user
/// directory. Holds no mutable state: the keys and TTLs inside the token
/// authority are loaded once at startup and shared read-only.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    tokens: Arc<TokenAuthority>,
    password_hasher: PasswordHasher,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User directory implementation
    /// * `tokens` - Token authority built from startup configuration
    pub fn new(repository: Arc<UR>, tokens: Arc<TokenAuthority>) -> Self {
        Self {
            repository,
            tokens,
            password_hasher: PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn signup(&self, command: SignupCommand) -> Result<User, AuthError> {
        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash,
            // Signup auto-verifies; no confirmation email is sent
            verified: true,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(user_id = %created_user.id, "Account created");

        Ok(created_user)
    }

    async fn login(&self, email: &EmailAddress, password: &str) -> Result<TokenPair, AuthError> {
        // Unknown email and wrong password surface identically
        let user = self
            .repository
            .find_by_email(email.as_str())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.verified {
            return Err(AuthError::UnverifiedAccount);
        }

        if !self.password_hasher.verify(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let now = Utc::now();
        let access_token = self.tokens.issue_access_token(user.email.as_str(), now)?;
        let refresh_token = self.tokens.issue_refresh_token(user.email.as_str(), now)?;

        tracing::info!(user_id = %user.id, "Login succeeded");

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    async fn refresh(&self, token: &str) -> Result<String, AuthError> {
        let user = self.authorize(token, TokenPurpose::Refresh).await?;

        // A new access token only; refresh tokens are not rotated
        let access_token = self
            .tokens
            .issue_access_token(user.email.as_str(), Utc::now())?;

        Ok(access_token)
    }

    async fn authorize(
        &self,
        token: &str,
        purpose: TokenPurpose,
    ) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.tokens.verify(purpose, token)?;

        // One directory lookup, no retry; a miss means the token speaks for
        // a deleted account
        let user = self
            .repository
            .find_by_email(&claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(AuthenticatedUser {
            id: user.id,
            email: user.email,
        })
    }
}
