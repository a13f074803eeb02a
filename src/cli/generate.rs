use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::Config,
    error, info,
    management::{FileTokenStore, TokenProvider},
    model::{ClaudeClient, SuggestionSource},
    pipeline::PlaylistMaterializer,
    spotify::{AccountsClient, SpotifyClient},
    success,
    types::PlaylistRequest,
};

/// Generates suggestions for the given preferences and materializes them
/// as a playlist on the linked account.
pub async fn generate(config: Arc<Config>, request: PlaylistRequest) {
    let model = ClaudeClient::new(Arc::clone(&config));

    let pb = ProgressBar::new_spinner();
    pb.set_message("Asking the model for track suggestions...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let suggestions = match model.generate(&request).await {
        Ok(suggestions) => {
            pb.finish_and_clear();
            suggestions
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to generate suggestions: {}", e);
        }
    };

    if suggestions.is_empty() {
        error!("The model returned no usable suggestions.");
    }
    success!("Model suggested {} tracks", suggestions.len());

    let provider = TokenProvider::new(
        FileTokenStore::new(),
        AccountsClient::new(Arc::clone(&config)),
        config.user_id.clone(),
    );
    let catalog = SpotifyClient::new(Arc::clone(&config));
    let materializer = PlaylistMaterializer::new(catalog, provider, Arc::clone(&config));

    match materializer.materialize(&suggestions, &request).await {
        Ok(playlist) => {
            success!("Playlist created with {} tracks", playlist.track_count);
            info!("{}", playlist.public_url);
        }
        Err(e) => error!("{}", e),
    }
}
