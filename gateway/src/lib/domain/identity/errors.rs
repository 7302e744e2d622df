use thiserror::Error;

/// Error for user store lookups.
///
/// A missing user is not an error; lookups return `Ok(None)`. This type
/// covers the store itself being broken (unreadable seed file, and for a
/// persistent implementation, connectivity).
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("User store unavailable: {0}")]
    Unavailable(String),
}

/// Top-level error for authentication and token validation.
///
/// The first four variants are the authentication taxonomy; they all
/// collapse to a single 401 at the HTTP boundary, and the distinction is
/// only ever written to the logs. The remaining variants are
/// infrastructure faults and map to 500.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Unknown username or wrong password. Deliberately a single variant
    /// so the caller cannot enumerate usernames.
    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Token is malformed or badly signed: {0}")]
    MalformedToken(String),

    #[error("Token is expired")]
    ExpiredToken,

    #[error("Token subject does not resolve to a user: {0}")]
    UnknownSubject(String),

    // Infrastructure errors
    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("Token generation failed: {0}")]
    TokenGeneration(String),

    #[error("User store error: {0}")]
    Store(#[from] StoreError),
}
