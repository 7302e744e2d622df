use serde::Deserialize;

/// A user as loaded from the seed table.
///
/// Records are immutable after startup: the store loads them once and
/// serves read-only lookups for the rest of the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    /// Unique key; also the token subject for this user.
    pub username: String,
    pub full_name: String,
    pub email: String,
    /// Argon2 digest in PHC string format.
    pub hashed_password: String,
    /// Carried from the seed data; not enforced during authentication
    /// or token validation.
    #[serde(default)]
    pub disabled: bool,
}

/// Login credentials presented to the token endpoint.
///
/// The password is transient: verified against the stored digest and
/// dropped. It is never persisted and never logged.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
