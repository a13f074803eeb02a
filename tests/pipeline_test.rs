use std::{collections::HashMap, sync::Arc, sync::Mutex, time::Duration};

use async_trait::async_trait;
use chrono::Utc;
use moodlist::config::Config;
use moodlist::error::PipelineError;
use moodlist::management::CredentialSource;
use moodlist::pipeline::{Pacing, PlaylistMaterializer};
use moodlist::spotify::Catalog;
use moodlist::types::{
    AlbumRef, Credential, ExternalUrls, FullTrack, PlaylistRequest, ResolvedTrack, Suggestion,
    TokenTier, TrackArtist,
};

fn test_config(user_id: Option<&str>) -> Arc<Config> {
    Arc::new(Config {
        client_id: "client".to_string(),
        client_secret: "secret".to_string(),
        redirect_uri: "http://127.0.0.1:8080/callback".to_string(),
        scope: "playlist-modify-public".to_string(),
        user_id: user_id.map(|u| u.to_string()),
        api_url: "https://api.example.test/v1".to_string(),
        auth_url: "https://accounts.example.test/authorize".to_string(),
        token_url: "https://accounts.example.test/api/token".to_string(),
        public_url: "https://open.example.test".to_string(),
        server_addr: "127.0.0.1:8080".to_string(),
        model_api_key: None,
        model: "test-model".to_string(),
        search_delay: Duration::ZERO,
    })
}

struct FakeCredentials {
    tier: TokenTier,
}

#[async_trait]
impl CredentialSource for &FakeCredentials {
    async fn acquire(&self) -> Result<Credential, PipelineError> {
        Ok(Credential {
            token: "token".to_string(),
            tier: self.tier,
            expires_at: Utc::now() + chrono::Duration::hours(1),
        })
    }
}

struct FakeCatalog {
    /// suggestion raw line -> catalog URI for resolvable tracks
    tracks: HashMap<String, String>,
    fail_create: bool,
    events: Mutex<Vec<String>>,
    added: Mutex<Vec<String>>,
    created_name: Mutex<Option<String>>,
}

impl FakeCatalog {
    fn new(tracks: &[(&str, &str)]) -> Self {
        FakeCatalog {
            tracks: tracks
                .iter()
                .map(|(raw, uri)| (raw.to_string(), uri.to_string()))
                .collect(),
            fail_create: false,
            events: Mutex::new(Vec::new()),
            added: Mutex::new(Vec::new()),
            created_name: Mutex::new(None),
        }
    }

    fn failing_create() -> Self {
        let mut catalog = Self::new(&[]);
        catalog.fail_create = true;
        catalog
    }

    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: impl Into<String>) {
        self.events.lock().unwrap().push(event.into());
    }
}

#[async_trait]
impl Catalog for &FakeCatalog {
    async fn resolve_track(
        &self,
        suggestion: &Suggestion,
        _credential: &Credential,
    ) -> ResolvedTrack {
        self.record(format!("resolve:{}", suggestion.raw));
        match self.tracks.get(&suggestion.raw) {
            Some(uri) => ResolvedTrack::found(
                suggestion.clone(),
                FullTrack {
                    name: suggestion.song.clone(),
                    uri: uri.clone(),
                    preview_url: None,
                    artists: vec![TrackArtist {
                        name: suggestion.artist.clone(),
                    }],
                    album: AlbumRef {
                        name: "Album".to_string(),
                    },
                    external_urls: ExternalUrls {
                        spotify: format!("https://open.example.test/track/{}", uri),
                    },
                },
            ),
            None => ResolvedTrack::not_found(suggestion.clone()),
        }
    }

    async fn current_user_id(&self, _credential: &Credential) -> Result<String, PipelineError> {
        self.record("me");
        Ok("resolved-user".to_string())
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        _description: &str,
        _credential: &Credential,
    ) -> Result<String, PipelineError> {
        self.record(format!("create:{}", user_id));
        if self.fail_create {
            return Err(PipelineError::PlaylistCreateFailed("403: nope".to_string()));
        }
        *self.created_name.lock().unwrap() = Some(name.to_string());
        Ok("playlist-1".to_string())
    }

    async fn add_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
        _credential: &Credential,
    ) -> Result<(), PipelineError> {
        self.record(format!("add:{}", playlist_id));
        self.added.lock().unwrap().extend(uris.iter().cloned());
        Ok(())
    }
}

fn suggestions(lines: &[&str]) -> Vec<Suggestion> {
    lines
        .iter()
        .map(|line| {
            let (song, artist) = line.split_once(" - ").unwrap();
            Suggestion::new(song, artist)
        })
        .collect()
}

fn request() -> PlaylistRequest {
    PlaylistRequest {
        mood: "energico".to_string(),
        genres: vec!["rock".to_string()],
        era: "anos-80".to_string(),
        additional_preferences: String::new(),
    }
}

#[tokio::test]
async fn test_application_only_credential_short_circuits() {
    let catalog = FakeCatalog::new(&[("Imagine - John Lennon", "spotify:track:1")]);
    let credentials = FakeCredentials {
        tier: TokenTier::ApplicationOnly,
    };
    let materializer = PlaylistMaterializer::new(&catalog, &credentials, test_config(Some("u")))
        .with_pacing(Pacing::none());

    let result = materializer
        .materialize(&suggestions(&["Imagine - John Lennon"]), &request())
        .await;

    assert!(matches!(result, Err(PipelineError::NoCredential)));
    // No creation call and no resolution work happened
    assert!(catalog.events().is_empty());
}

#[tokio::test]
async fn test_creation_failure_aborts_before_resolution() {
    let catalog = FakeCatalog::failing_create();
    let credentials = FakeCredentials {
        tier: TokenTier::UserDelegated,
    };
    let materializer = PlaylistMaterializer::new(&catalog, &credentials, test_config(Some("u")))
        .with_pacing(Pacing::none());

    let result = materializer
        .materialize(&suggestions(&["Imagine - John Lennon"]), &request())
        .await;

    assert!(matches!(result, Err(PipelineError::PlaylistCreateFailed(_))));
    let events = catalog.events();
    assert_eq!(events, vec!["create:u"]);
}

#[tokio::test]
async fn test_zero_resolvable_is_empty_result_without_attach() {
    let catalog = FakeCatalog::new(&[]);
    let credentials = FakeCredentials {
        tier: TokenTier::UserDelegated,
    };
    let materializer = PlaylistMaterializer::new(&catalog, &credentials, test_config(Some("u")))
        .with_pacing(Pacing::none());

    let result = materializer
        .materialize(
            &suggestions(&["Unknown One - Nobody", "Unknown Two - Nobody"]),
            &request(),
        )
        .await;

    assert!(matches!(result, Err(PipelineError::EmptyResult)));
    // The playlist was created and stays empty; the attach endpoint was
    // never called.
    let events = catalog.events();
    assert!(events.contains(&"create:u".to_string()));
    assert!(!events.iter().any(|e| e.starts_with("add:")));
    assert!(catalog.added.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_happy_path_preserves_order_and_skips_unresolved() {
    let catalog = FakeCatalog::new(&[
        ("Bohemian Rhapsody - Queen", "spotify:track:1"),
        ("Sweet Child O Mine - Guns N Roses", "spotify:track:2"),
    ]);
    let credentials = FakeCredentials {
        tier: TokenTier::UserDelegated,
    };
    let materializer = PlaylistMaterializer::new(&catalog, &credentials, test_config(Some("u")))
        .with_pacing(Pacing::none());

    let before = Utc::now().date_naive();
    let playlist = materializer
        .materialize(
            &suggestions(&[
                "Bohemian Rhapsody - Queen",
                "Missing Song - Nobody",
                "Sweet Child O Mine - Guns N Roses",
            ]),
            &request(),
        )
        .await
        .unwrap();
    let after = Utc::now().date_naive();

    assert_eq!(playlist.id, "playlist-1");
    assert_eq!(playlist.track_count, 2);
    assert_eq!(
        playlist.public_url,
        "https://open.example.test/playlist/playlist-1"
    );

    let added = catalog.added.lock().unwrap().clone();
    assert_eq!(added, vec!["spotify:track:1", "spotify:track:2"]);

    // Name carries the label for the requested mood and today's day-month.
    // Both date captures guard against the run straddling midnight.
    let name = catalog.created_name.lock().unwrap().clone().unwrap();
    assert!(name.starts_with("Moodlist Energetic "));
    assert!(
        name == format!("Moodlist Energetic {}", before.format("%d-%m"))
            || name == format!("Moodlist Energetic {}", after.format("%d-%m"))
    );

    // Creation strictly precedes resolution
    let events = catalog.events();
    assert_eq!(events[0], "create:u");
    assert!(events[1].starts_with("resolve:"));
}

#[tokio::test]
async fn test_user_identity_falls_back_to_profile_lookup() {
    let catalog = FakeCatalog::new(&[("Imagine - John Lennon", "spotify:track:1")]);
    let credentials = FakeCredentials {
        tier: TokenTier::UserDelegated,
    };
    let materializer = PlaylistMaterializer::new(&catalog, &credentials, test_config(None))
        .with_pacing(Pacing::none());

    materializer
        .materialize(&suggestions(&["Imagine - John Lennon"]), &request())
        .await
        .unwrap();

    let events = catalog.events();
    assert_eq!(events[0], "me");
    assert_eq!(events[1], "create:resolved-user");
}
