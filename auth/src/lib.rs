//! Authentication utilities library
//!
//! Provides the credential primitives used by the identity service:
//! - Password hashing (Argon2id, tunable work factor)
//! - Signed, time-limited access tokens (HS256 JWT)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_work_factor(1).unwrap();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{JwtHandler, Subject};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let token = handler
//!     .issue(Subject::new(1, "Alice", "alice@x.com"), Duration::hours(1))
//!     .unwrap();
//! let claims = handler.verify(&token).unwrap();
//! assert_eq!(claims.email, "alice@x.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Subject};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!")
//!     .with_work_factor(1)
//!     .unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("Abc123").unwrap();
//!
//! // Login: verify and generate token
//! let subject = Subject::new(1, "Alice", "alice@x.com");
//! let result = auth.authenticate("Abc123", &hash, subject).unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.user, "Alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::Subject;
pub use password::PasswordError;
pub use password::PasswordHasher;
