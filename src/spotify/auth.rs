//! Accounts-service client: authorize URL construction and the three
//! OAuth grant types the pipeline needs.

use std::sync::Arc;

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;

use crate::{config::Config, error::PipelineError, types::TokenResponse, utils};

/// Identity-provider capability: the two token exchanges the credential
/// provider performs on its own.
#[async_trait]
pub trait IdentityApi: Send + Sync {
    /// Exchanges a refresh token for a fresh access token.
    async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse, PipelineError>;

    /// Performs the client-credentials exchange for an application-only
    /// token.
    async fn client_credentials(&self) -> Result<TokenResponse, PipelineError>;
}

/// Client for the Spotify accounts service.
pub struct AccountsClient {
    http: Client,
    config: Arc<Config>,
}

impl AccountsClient {
    pub fn new(config: Arc<Config>) -> Self {
        AccountsClient {
            http: Client::new(),
            config,
        }
    }

    /// Builds the provider authorize URL the user's browser is sent to.
    pub fn authorize_url(&self) -> String {
        format!(
            "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}",
            auth_url = self.config.auth_url,
            client_id = urlencoding::encode(&self.config.client_id),
            redirect_uri = urlencoding::encode(&self.config.redirect_uri),
            scope = urlencoding::encode(&self.config.scope),
        )
    }

    /// Exchanges an authorization code for the initial token pair.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, PipelineError> {
        self.token_request(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &self.config.redirect_uri),
        ])
        .await
    }

    /// `Authorization: Basic base64(client_id:client_secret)` with CR/LF
    /// stripped from both halves before encoding.
    fn basic_auth(&self) -> String {
        let credentials = format!(
            "{}:{}",
            utils::sanitize_header_value(&self.config.client_id),
            utils::sanitize_header_value(&self.config.client_secret),
        );
        format!("Basic {}", STANDARD.encode(credentials))
    }

    async fn token_request(&self, form: &[(&str, &str)]) -> Result<TokenResponse, PipelineError> {
        let response = self
            .http
            .post(&self.config.token_url)
            .header("Authorization", self.basic_auth())
            .form(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PipelineError::UpstreamUnreachable(format!(
                "token endpoint answered {}: {}",
                status, body
            )));
        }

        Ok(response.json::<TokenResponse>().await?)
    }
}

#[async_trait]
impl IdentityApi for AccountsClient {
    async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse, PipelineError> {
        self.token_request(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .await
    }

    async fn client_credentials(&self) -> Result<TokenResponse, PipelineError> {
        self.token_request(&[("grant_type", "client_credentials")]).await
    }
}
