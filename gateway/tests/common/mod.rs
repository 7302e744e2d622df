use std::sync::Arc;

use auth::Claims;
use auth::JwtHandler;
use auth::PasswordHasher;
use chrono::Duration;
use gateway::domain::identity::models::UserRecord;
use gateway::domain::identity::service::IdentityService;
use gateway::inbound::http::router::create_router;
use gateway::outbound::store::InMemoryUserStore;

const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server on a random port
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let hasher = PasswordHasher::new();

        let store = Arc::new(InMemoryUserStore::from_records([
            UserRecord {
                username: "johndoe".to_string(),
                full_name: "John Doe".to_string(),
                email: "johndoe@example.com".to_string(),
                hashed_password: hasher.hash("secret").expect("Failed to hash password"),
                disabled: false,
            },
            UserRecord {
                username: "alice".to_string(),
                full_name: "Alice Wonderson".to_string(),
                email: "alice@example.com".to_string(),
                hashed_password: hasher.hash("wonderland").expect("Failed to hash password"),
                disabled: false,
            },
        ]));

        let identity = Arc::new(IdentityService::new(
            store,
            TEST_SECRET,
            Duration::minutes(30),
        ));
        let router = create_router(identity);

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Craft a token signed with the app's key, bypassing the login flow.
    pub fn token_for(&self, subject: &str, ttl: Duration) -> String {
        self.jwt_handler
            .encode(&Claims::for_subject(subject, ttl))
            .expect("Failed to encode token")
    }

    /// Log in over HTTP and return the issued access token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/token")
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["access_token"]
            .as_str()
            .expect("access_token missing")
            .to_string()
    }
}
