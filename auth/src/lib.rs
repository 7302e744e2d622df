//! Authentication mechanisms for the token gateway.
//!
//! Two building blocks, free of any HTTP or storage concerns:
//! - Password hashing and verification (Argon2id, PHC string format)
//! - Signed session tokens (JWT, HS256)
//!
//! The gateway service composes these with its user store to form the
//! full authenticate/issue/validate pipeline.
//!
//! # Examples
//!
//! ## Password hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("secret").unwrap();
//! assert!(hasher.verify("secret", &digest).unwrap());
//! assert!(!hasher.verify("not-secret", &digest).unwrap());
//! ```
//!
//! ## Session tokens
//! ```
//! use auth::{Claims, JwtHandler};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"signing-key-of-at-least-32-bytes!!");
//! let claims = Claims::for_subject("johndoe", Duration::minutes(30));
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub.as_deref(), Some("johndoe"));
//! ```

pub mod jwt;
pub mod password;

pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
