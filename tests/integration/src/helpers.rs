//! Test helpers for integration tests
//!
//! Provides the test server, request helpers and response assertions.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use roster_api::{create_app, create_dispatcher, AppState};
use roster_common::{AppConfig, SessionService};
use roster_service::{AuthService, DiscordProfile, ServiceContext};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::discord::{MockDiscord, TEST_BOT_TOKEN};
use crate::fixtures::seed_members;
use crate::memory::MemoryStores;

pub const INTERNAL_TOKEN: &str = "test-internal-token";
pub const INTERNAL_TOKEN_HEADER: &str = "x-internal-token";

/// API server on an ephemeral port, backed by in-memory stores and a mock
/// Discord API
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub discord: MockDiscord,
    pub stores: MemoryStores,
    state: AppState,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let discord = MockDiscord::start().await?;
        let config = test_config(&discord);
        Self::start_with_config(config, discord).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig, discord: MockDiscord) -> Result<Self> {
        let stores = MemoryStores::with_members(seed_members());

        let session_service = Arc::new(SessionService::new(
            &config.session.secret,
            config.session.ttl_seconds,
        ));
        let service_context = stores
            .context_builder()
            .notifier(create_dispatcher(&config)?)
            .session_service(session_service)
            .reminder_offset_hours(config.reminders.utc_offset_hours)
            .build()?;

        let state = AppState::new(service_context, config);
        let app = create_app(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            discord,
            stores,
            state,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Service context behind the running server
    pub fn context(&self) -> &ServiceContext {
        self.state.service_context()
    }

    /// Sign a Discord user in and return the bearer token
    pub async fn sign_in(&self, discord_id: &str, username: &str, is_manager: bool) -> Result<String> {
        let response = AuthService::new(self.context())
            .sign_in(DiscordProfile {
                discord_id: discord_id.to_string(),
                username: username.to_string(),
                display_name: username.to_string(),
                avatar: None,
                is_manager,
            })
            .await?;
        Ok(response.session.token)
    }

    /// Token for a manager account
    pub async fn manager_token(&self) -> Result<String> {
        self.sign_in("900000000000000001", "captain", true).await
    }

    /// Configure the Discord webhook to point at the mock
    pub async fn configure_webhook(&self, manager_token: &str) -> Result<()> {
        let body = serde_json::json!({ "webhook": self.discord.webhook_url() });
        let response = self.put_auth("/api/webhook", manager_token, &body).await?;
        assert_status(response, StatusCode::OK).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    fn bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", format!("Bearer {}", token))
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(Self::bearer(self.client.get(self.url(path)), token).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(Self::bearer(self.client.post(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a POST request with auth token and no body
    pub async fn post_empty_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(Self::bearer(self.client.post(self.url(path)), token).send().await?)
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.put(self.url(path)).json(body).send().await?)
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(Self::bearer(self.client.put(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(Self::bearer(self.client.patch(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(Self::bearer(self.client.delete(self.url(path)), token).send().await?)
    }

    /// GET an internal endpoint with the internal token
    pub async fn get_internal(&self, path: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .header(INTERNAL_TOKEN_HEADER, INTERNAL_TOKEN)
            .send()
            .await?)
    }

    /// POST to an internal endpoint with the internal token
    pub async fn post_internal(&self, path: &str) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header(INTERNAL_TOKEN_HEADER, INTERNAL_TOKEN)
            .send()
            .await?)
    }
}

/// Test configuration pointing the notifier at the mock Discord API
pub fn test_config(discord: &MockDiscord) -> AppConfig {
    let mut config = AppConfig::for_tests();
    config.discord.api_base = discord.api_base();
    config.discord.bot_token = Some(TEST_BOT_TOKEN.to_string());
    config.internal.token = Some(INTERNAL_TOKEN.to_string());
    config
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
