use async_trait::async_trait;
use chrono::Duration;

use crate::domain::identity::errors::AuthError;
use crate::domain::identity::errors::StoreError;
use crate::domain::identity::models::Credentials;
use crate::domain::identity::models::UserRecord;

/// Read-only lookup of user records.
///
/// The gateway ships an in-memory table loaded at startup; a persistent
/// store can be swapped in behind this port without touching the
/// authentication or validation logic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find a user by its unique username.
    ///
    /// Absence is `Ok(None)`, not an error.
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError>;
}

/// Port for identity domain operations.
#[async_trait]
pub trait IdentityServicePort: Send + Sync + 'static {
    /// Verify credentials against the user store.
    ///
    /// # Errors
    /// * `InvalidCredentials` - unknown username or wrong password,
    ///   indistinguishable by design
    /// * `PasswordHash` - stored digest could not be parsed
    /// * `Store` - lookup failed
    async fn authenticate(&self, credentials: &Credentials) -> Result<UserRecord, AuthError>;

    /// Issue a signed token for `user`, expiring `ttl` from now.
    ///
    /// Falls back to the configured default TTL when `ttl` is `None`.
    ///
    /// # Errors
    /// * `TokenGeneration` - signing failed
    async fn issue_token(
        &self,
        user: &UserRecord,
        ttl: Option<Duration>,
    ) -> Result<String, AuthError>;

    /// Validate a presented token and resolve its subject to a user.
    ///
    /// Checks run in order and short-circuit: signature and structure,
    /// then expiry, then subject resolution.
    ///
    /// # Errors
    /// * `MalformedToken` - undecodable, badly signed, or missing subject
    /// * `ExpiredToken` - past its `exp` claim
    /// * `UnknownSubject` - subject not present in the user store
    /// * `Store` - lookup failed
    async fn validate_token(&self, token: &str) -> Result<UserRecord, AuthError>;
}
