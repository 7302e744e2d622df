use std::sync::Arc;

use async_trait::async_trait;
use auth::Claims;
use auth::JwtError;
use auth::JwtHandler;
use auth::PasswordHasher;
use chrono::Duration;

use crate::domain::identity::errors::AuthError;
use crate::domain::identity::models::Credentials;
use crate::domain::identity::models::UserRecord;
use crate::domain::identity::ports::IdentityServicePort;
use crate::domain::identity::ports::UserStore;

/// Domain service for the authenticate/issue/validate pipeline.
///
/// Holds the signing key and default TTL fixed at construction; the
/// service itself is stateless and safe to share across requests.
pub struct IdentityService<S>
where
    S: UserStore,
{
    store: Arc<S>,
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    default_ttl: Duration,
}

impl<S> IdentityService<S>
where
    S: UserStore,
{
    /// Create a new identity service.
    ///
    /// # Arguments
    /// * `store` - user lookup implementation
    /// * `signing_key` - process-wide symmetric token signing key
    /// * `default_ttl` - token lifetime when the caller does not supply one
    pub fn new(store: Arc<S>, signing_key: &[u8], default_ttl: Duration) -> Self {
        Self {
            store,
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(signing_key),
            default_ttl,
        }
    }
}

#[async_trait]
impl<S> IdentityServicePort for IdentityService<S>
where
    S: UserStore,
{
    async fn authenticate(&self, credentials: &Credentials) -> Result<UserRecord, AuthError> {
        // Lookup miss and password mismatch produce the same variant so
        // the outward signal never confirms that a username exists.
        let Some(user) = self.store.find_by_username(&credentials.username).await? else {
            return Err(AuthError::InvalidCredentials);
        };

        let verified = self
            .password_hasher
            .verify(&credentials.password, &user.hashed_password)
            .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

        if !verified {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn issue_token(
        &self,
        user: &UserRecord,
        ttl: Option<Duration>,
    ) -> Result<String, AuthError> {
        let claims = Claims::for_subject(&user.username, ttl.unwrap_or(self.default_ttl));

        self.jwt_handler
            .encode(&claims)
            .map_err(|e| AuthError::TokenGeneration(e.to_string()))
    }

    async fn validate_token(&self, token: &str) -> Result<UserRecord, AuthError> {
        // Signature and expiry are checked by the decoder, in that order.
        let claims: Claims = self.jwt_handler.decode(token).map_err(|e| match e {
            JwtError::Expired => AuthError::ExpiredToken,
            other => AuthError::MalformedToken(other.to_string()),
        })?;

        let subject = claims
            .sub
            .filter(|sub| !sub.is_empty())
            .ok_or_else(|| AuthError::MalformedToken("missing subject claim".to_string()))?;

        self.store
            .find_by_username(&subject)
            .await?
            .ok_or(AuthError::UnknownSubject(subject))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identity::ports::MockUserStore;

    const SECRET: &[u8] = b"test-signing-key-of-at-least-32-bytes!";

    fn john() -> UserRecord {
        UserRecord {
            username: "johndoe".to_string(),
            full_name: "John Doe".to_string(),
            email: "johndoe@example.com".to_string(),
            hashed_password: PasswordHasher::new()
                .hash("secret")
                .expect("Failed to hash password"),
            disabled: false,
        }
    }

    /// Service over a store containing exactly `user`.
    fn service_for(user: UserRecord) -> IdentityService<MockUserStore> {
        let mut store = MockUserStore::new();
        store.expect_find_by_username().returning(move |username| {
            Ok(Some(user.clone()).filter(|u| u.username == username))
        });

        IdentityService::new(Arc::new(store), SECRET, Duration::minutes(30))
    }

    /// Service over a store containing only John Doe.
    fn service() -> IdentityService<MockUserStore> {
        service_for(john())
    }

    fn credentials(username: &str, password: &str) -> Credentials {
        Credentials {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let service = service();

        let user = service
            .authenticate(&credentials("johndoe", "secret"))
            .await
            .expect("Authentication failed");
        assert_eq!(user.username, "johndoe");
    }

    #[tokio::test]
    async fn test_authenticate_unknown_username() {
        let service = service();

        let result = service.authenticate(&credentials("lennon", "secret")).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let service = service();

        // Same variant as the unknown-username case
        let result = service
            .authenticate(&credentials("johndoe", "password"))
            .await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_issue_then_validate_roundtrip() {
        // One record shared between the store and the assertion: hashing
        // salts every call, so two `john()` records would never compare equal
        let user = john();
        let service = service_for(user.clone());

        let token = service
            .issue_token(&user, None)
            .await
            .expect("Failed to issue token");

        let resolved = service
            .validate_token(&token)
            .await
            .expect("Validation failed");
        assert_eq!(resolved, user);
    }

    #[tokio::test]
    async fn test_validate_expired_token() {
        let service = service();

        let token = service
            .issue_token(&john(), Some(Duration::minutes(-1)))
            .await
            .expect("Failed to issue token");

        let result = service.validate_token(&token).await;
        assert!(matches!(result, Err(AuthError::ExpiredToken)));
    }

    #[tokio::test]
    async fn test_validate_unknown_subject() {
        let service = service();

        let token = JwtHandler::new(SECRET)
            .encode(&Claims::for_subject("lennon", Duration::minutes(30)))
            .expect("Failed to encode token");

        let result = service.validate_token(&token).await;
        assert!(matches!(result, Err(AuthError::UnknownSubject(_))));
    }

    #[tokio::test]
    async fn test_validate_gibberish() {
        let service = service();

        let result = service.validate_token("gibberish").await;
        assert!(matches!(result, Err(AuthError::MalformedToken(_))));
    }

    #[tokio::test]
    async fn test_validate_missing_subject() {
        let service = service();

        let token = JwtHandler::new(SECRET)
            .encode(&Claims::new().with_expiration(i64::MAX))
            .expect("Failed to encode token");

        let result = service.validate_token(&token).await;
        assert!(matches!(result, Err(AuthError::MalformedToken(_))));
    }

    #[tokio::test]
    async fn test_validate_empty_subject() {
        let service = service();

        let token = JwtHandler::new(SECRET)
            .encode(&Claims::new().with_subject("").with_expiration(i64::MAX))
            .expect("Failed to encode token");

        let result = service.validate_token(&token).await;
        assert!(matches!(result, Err(AuthError::MalformedToken(_))));
    }

    #[tokio::test]
    async fn test_validate_wrong_signing_key() {
        let service = service();

        let token = JwtHandler::new(b"a-different-signing-key-32-bytes-long!")
            .encode(&Claims::for_subject("johndoe", Duration::minutes(30)))
            .expect("Failed to encode token");

        let result = service.validate_token(&token).await;
        assert!(matches!(result, Err(AuthError::MalformedToken(_))));
    }
}
