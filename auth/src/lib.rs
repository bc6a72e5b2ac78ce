//! Authentication primitives
//!
//! Reusable building blocks for credential handling:
//! - Password hashing and verification (Argon2id)
//! - JWT token issuance and verification (HS256)
//!
//! Services compose these behind their own domain traits; nothing in this
//! crate touches storage or the network.
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
//! use auth::TokenAuthority;
//!
//! let authority = TokenAuthority::new(b"secret_key_at_least_32_bytes_long!", 3600);
//! let token = authority.issue("user123", "alice@example.com").unwrap();
//! let claims = authority.verify(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod password;
pub mod token;

pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenAuthority;
pub use token::TokenError;
