use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use chrono::{Duration, Utc};

use crate::{
    management::TokenStore,
    server::{AuthFlow, AuthOutcome},
    types::{Credential, StoredToken, TokenTier},
    warning,
};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<Arc<AuthFlow>>,
) -> Html<&'static str> {
    if let Some(error) = params.get("error") {
        warning!("Spotify authorization failed: {}", error);
        return Html("<h4>Authorization failed.</h4>");
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let token = match state.accounts.exchange_code(code).await {
        Ok(token) => token,
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            return Html("<h4>Login failed.</h4>");
        }
    };

    // The fresh access token is user-delegated; use it to resolve which
    // account we just linked.
    let credential = Credential {
        token: token.access_token.clone(),
        tier: TokenTier::UserDelegated,
        expires_at: Utc::now() + Duration::seconds(token.expires_in as i64),
    };
    let profile = match state.catalog.current_user(&credential).await {
        Ok(profile) => profile,
        Err(e) => {
            warning!("Could not resolve user profile: {}", e);
            return Html("<h4>Login failed.</h4>");
        }
    };

    let record = StoredToken {
        user_id: profile.id.clone(),
        access_token: token.access_token,
        refresh_token: token.refresh_token,
        expires_at: credential.expires_at,
    };
    if let Err(e) = state.store.upsert(&profile.id, &record).await {
        warning!("Failed to save token record: {}", e);
        return Html("<h4>Login failed.</h4>");
    }

    let mut outcome = state.outcome.lock().await;
    *outcome = Some(AuthOutcome {
        user_id: profile.id,
        display_name: profile.display_name,
    });

    Html("<h2>Authentication successful.</h2><p>Close this browser window.</p>")
}
