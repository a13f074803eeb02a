use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    error, info,
    server::{AuthFlow, AuthOutcome, start_api_server},
    success, warning,
};

/// Runs the one-time authorization flow against Spotify.
///
/// Opens the authorize URL in the user's browser, catches the redirect on
/// the local callback server and waits for the callback handler to link
/// the account. The exchanged token pair is persisted by the handler; on
/// success the linked user id is printed so it can be pinned via
/// `SPOTIFY_USER_ID`.
pub async fn auth(config: Arc<Config>) {
    let flow = Arc::new(AuthFlow::new(config));
    let auth_url = flow.accounts.authorize_url();

    let server_state = Arc::clone(&flow);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    match wait_for_outcome(flow).await {
        Some(outcome) => {
            success!(
                "Linked Spotify account {} ({})",
                outcome.user_id,
                outcome.display_name.as_deref().unwrap_or("no display name")
            );
            info!(
                "Pin it for playlist creation by adding SPOTIFY_USER_ID={} to your .env",
                outcome.user_id
            );
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Polls the shared flow state for a completed authorization with a
/// 60-second timeout.
async fn wait_for_outcome(flow: Arc<AuthFlow>) -> Option<AuthOutcome> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let outcome = flow.outcome.lock().await;
        if let Some(outcome) = outcome.as_ref() {
            return Some(outcome.clone());
        }
        drop(outcome);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
