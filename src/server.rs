use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Extension, Router, routing::get};
use tokio::sync::Mutex;

use crate::{
    api,
    config::Config,
    error,
    management::FileTokenStore,
    spotify::{AccountsClient, SpotifyClient},
};

/// Result of a completed authorization flow, published by the callback
/// handler for the CLI to pick up.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub user_id: String,
    pub display_name: Option<String>,
}

/// Shared state of one authorization flow: the clients the callback
/// handler needs and the slot it publishes the outcome into.
pub struct AuthFlow {
    pub config: Arc<Config>,
    pub accounts: AccountsClient,
    pub catalog: SpotifyClient,
    pub store: FileTokenStore,
    pub outcome: Mutex<Option<AuthOutcome>>,
}

impl AuthFlow {
    pub fn new(config: Arc<Config>) -> Self {
        AuthFlow {
            accounts: AccountsClient::new(Arc::clone(&config)),
            catalog: SpotifyClient::new(Arc::clone(&config)),
            store: FileTokenStore::new(),
            outcome: Mutex::new(None),
            config,
        }
    }
}

pub async fn start_api_server(state: Arc<AuthFlow>) {
    let addr = match SocketAddr::from_str(&state.config.server_addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)));

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
