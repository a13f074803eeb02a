//! Generative-model client producing track suggestions.
//!
//! The model is a black-box collaborator from the pipeline's point of
//! view: it receives the preference tuple and answers with raw
//! `"Song - Artist"` lines, which are parsed into [`Suggestion`]s here.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::PipelineError,
    suggestions,
    types::{PlaylistRequest, Suggestion},
    utils,
};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Capability: turn preferences into an ordered list of suggestions.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn generate(&self, request: &PlaylistRequest) -> Result<Vec<Suggestion>, PipelineError>;
}

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

/// Claude messages-API client.
pub struct ClaudeClient {
    http: Client,
    config: Arc<Config>,
}

impl ClaudeClient {
    pub fn new(config: Arc<Config>) -> Self {
        ClaudeClient {
            http: Client::new(),
            config,
        }
    }

    fn build_prompt(request: &PlaylistRequest) -> String {
        let mood = if request.mood.is_empty() {
            "neutral"
        } else {
            &request.mood
        };
        let genres = if request.genres.is_empty() {
            "any genre".to_string()
        } else {
            request.genres.join(", ")
        };
        let era = if request.era.is_empty() {
            "any era"
        } else {
            &request.era
        };
        let additional = if request.additional_preferences.is_empty() {
            "none"
        } else {
            &request.additional_preferences
        };

        format!(
            "You are a music curation expert. Create a playlist of 20 songs based on \
             the following preferences. Mood: {mood}. Preferred genres: {genres}. \
             Era: {era}. Additional preferences: {additional}. \
             IMPORTANT: Answer with nothing but the list of songs, one per line, in \
             the exact format \"Song Name - Artist\". No numbering, no explanations. \
             Example: Bohemian Rhapsody - Queen. Include a mix of popular songs and \
             some lesser known ones that fit the requested mood."
        )
    }
}

#[async_trait]
impl SuggestionSource for ClaudeClient {
    async fn generate(&self, request: &PlaylistRequest) -> Result<Vec<Suggestion>, PipelineError> {
        let api_key = self.config.model_api_key.as_deref().ok_or_else(|| {
            PipelineError::UpstreamUnreachable("CLAUDE_API_KEY is not configured".to_string())
        })?;

        let body = MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: 1024,
            messages: vec![Message {
                role: "user".to_string(),
                content: Self::build_prompt(request),
            }],
        };

        let response = self
            .http
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", utils::sanitize_header_value(api_key))
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PipelineError::UpstreamUnreachable(format!(
                "model request failed with status {}",
                response.status()
            )));
        }

        let parsed: MessagesResponse = response.json().await?;
        let text = parsed
            .content
            .first()
            .and_then(|block| block.text.as_deref())
            .unwrap_or_default();

        Ok(suggestions::parse_suggestions(text))
    }
}
