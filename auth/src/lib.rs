//! Authentication primitives for the animal-collection backend.
//!
//! Provides the security-critical core shared by the service:
//! - Password hashing (Argon2id) with fail-closed verification
//! - Dual-key JWT issuance and verification (access + refresh purposes)
//!
//! Tokens are stateless: validity is purely a function of signature and
//! expiry at verification time. Access and refresh tokens are signed with
//! distinct secrets so one can never be presented where the other is
//! expected.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{TokenAuthority, TokenPurpose};
//! use chrono::{Duration, Utc};
//!
//! let authority = TokenAuthority::new(
//!     b"access_secret_at_least_32_bytes!!",
//!     b"refresh_secret_at_least_32_bytes!",
//!     "HS256",
//!     Duration::minutes(15),
//!     Duration::minutes(60 * 24 * 7),
//! )
//! .unwrap();
//!
//! let token = authority
//!     .issue_access_token("user@example.com", Utc::now())
//!     .unwrap();
//! let claims = authority.verify(TokenPurpose::Access, &token).unwrap();
//! assert_eq!(claims.sub, "user@example.com");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenAuthority;
pub use token::TokenError;
pub use token::TokenPurpose;
