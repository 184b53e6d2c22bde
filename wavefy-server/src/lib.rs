mod artists;
mod config;
mod context;
mod docs;
mod errors;
mod logging;
mod playlists;
mod serialized;
mod songs;

use std::{io, net::SocketAddr, path::Path};

use axum::{middleware, routing::get};
use log::info;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
};
use wavefy_catalog::SharedCatalog;

pub use config::*;
pub use context::ServerContext;
pub use errors::{ServerError, ServerResult};

/// Every catalog endpoint lives under this path
pub const API_PREFIX: &str = "/api";

pub type Router = axum::Router<ServerContext>;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Could not listen on {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("Server stopped unexpectedly: {0}")]
    Serve(#[source] io::Error),
}

/// Builds the wavefy application around the given catalog
pub fn app(catalog: SharedCatalog, config: &ServerConfig) -> axum::Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_router = Router::new()
        .nest("/playlists", playlists::router())
        .nest("/songs", songs::router())
        .nest("/artists", artists::router())
        .route("/docs.json", get(docs::docs));

    let mut root_router = Router::new().nest(API_PREFIX, api_router);

    if let Some(static_dir) = &config.static_dir {
        root_router = with_static_files(root_router, static_dir);
    }

    root_router
        .layer(middleware::from_fn(logging::log_requests))
        .layer(cors)
        .with_state(ServerContext { catalog })
}

/// Serves a built client from `dir`, unknown paths get its index.html
fn with_static_files(router: Router, dir: &Path) -> Router {
    let index = ServeFile::new(dir.join("index.html"));

    router.fallback_service(ServeDir::new(dir).fallback(index))
}

/// Starts the wavefy server
pub async fn run_server(config: ServerConfig, catalog: SharedCatalog) -> Result<(), StartupError> {
    config.check_static_dir()?;

    let address = config.address();
    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    if let Some(static_dir) = &config.static_dir {
        info!("Serving client files from {}", static_dir.display());
    }

    info!("Listening on http://{}", address);

    axum::serve(listener, app(catalog, &config))
        .await
        .map_err(StartupError::Serve)
}

#[cfg(test)]
mod test {
    use std::{fs, sync::Arc};

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use wavefy_catalog::{
        ArtistData, Catalog, CatalogError, MemoryCatalog, NewArtist, NewPlaylist, NewSong,
        NewUser, PlaylistData, Result, SharedCatalog, SongData, SongWithArtistData, UserData,
    };

    use super::{app, ServerConfig};

    /// A catalog whose backend is always broken
    struct FailingCatalog;

    fn broken<T>() -> Result<T> {
        Err(CatalogError::internal("backend is down"))
    }

    #[async_trait]
    impl Catalog for FailingCatalog {
        async fn user_by_id(&self, _: &str) -> Result<Option<UserData>> {
            broken()
        }
        async fn user_by_username(&self, _: &str) -> Result<Option<UserData>> {
            broken()
        }
        async fn create_user(&self, _: NewUser) -> Result<UserData> {
            broken()
        }
        async fn artist_by_id(&self, _: &str) -> Result<Option<ArtistData>> {
            broken()
        }
        async fn create_artist(&self, _: NewArtist) -> Result<ArtistData> {
            broken()
        }
        async fn list_artists(&self) -> Result<Vec<ArtistData>> {
            broken()
        }
        async fn song_by_id(&self, _: &str) -> Result<Option<SongData>> {
            broken()
        }
        async fn song_with_artist(&self, _: &str) -> Result<Option<SongWithArtistData>> {
            broken()
        }
        async fn create_song(&self, _: NewSong) -> Result<SongData> {
            broken()
        }
        async fn list_songs(&self) -> Result<Vec<SongWithArtistData>> {
            broken()
        }
        async fn recent_songs(&self, _: usize) -> Result<Vec<SongWithArtistData>> {
            broken()
        }
        async fn playlist_by_id(&self, _: &str) -> Result<Option<PlaylistData>> {
            broken()
        }
        async fn create_playlist(&self, _: NewPlaylist) -> Result<PlaylistData> {
            broken()
        }
        async fn list_playlists(&self) -> Result<Vec<PlaylistData>> {
            broken()
        }
    }

    fn sample_app() -> axum::Router {
        app(
            Arc::new(MemoryCatalog::with_sample_data()),
            &ServerConfig::default(),
        )
    }

    async fn get_raw(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, bytes.to_vec())
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let (status, bytes) = get_raw(app, uri).await;

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn ids_of(value: &Value) -> Vec<&str> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|x| x["id"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn song_includes_its_artist() {
        let (status, song) = get(sample_app(), "/api/songs/1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            song,
            json!({
                "id": "1",
                "title": "Midnight Dreams",
                "artistId": "1",
                "duration": 222,
                "image": "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?auto=format&fit=crop&w=400&h=400",
                "audioUrl": null,
                "artist": { "id": "1", "name": "Luna Rodriguez", "image": null }
            })
        );
    }

    #[tokio::test]
    async fn every_listed_song_has_an_artist() {
        let (status, songs) = get(sample_app(), "/api/songs").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids_of(&songs), vec!["1", "2", "3", "4", "5", "6"]);

        for song in songs.as_array().unwrap() {
            assert!(song["artist"].is_object());
        }
    }

    #[tokio::test]
    async fn unresolved_artist_is_a_placeholder() {
        let catalog = Arc::new(MemoryCatalog::new());
        let song = catalog
            .create_song(NewSong {
                title: "Nobody's".to_string(),
                artist_id: None,
                duration: 95,
                image: None,
                audio_url: None,
            })
            .await
            .unwrap();

        let catalog: SharedCatalog = catalog;
        let app = app(catalog, &ServerConfig::default());
        let (status, body) = get(app, &format!("/api/songs/{}", song.id)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["artistId"], Value::Null);
        assert_eq!(
            body["artist"],
            json!({ "id": "", "name": "Unknown Artist", "image": null })
        );
    }

    #[tokio::test]
    async fn recent_songs_respects_limit() {
        let (status, songs) = get(sample_app(), "/api/songs/recent?limit=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids_of(&songs), vec!["1", "2"]);

        let (_, songs) = get(sample_app(), "/api/songs/recent").await;
        assert_eq!(ids_of(&songs).len(), 6);

        let (_, songs) = get(sample_app(), "/api/songs/recent?limit=100").await;
        assert_eq!(ids_of(&songs).len(), 6);

        let (status, songs) = get(sample_app(), "/api/songs/recent?limit=soon").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(songs, json!([]));
    }

    #[tokio::test]
    async fn recent_songs_reads_leading_digits_of_limit() {
        let (status, songs) = get(sample_app(), "/api/songs/recent?limit=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids_of(&songs).len(), 6);

        let (status, songs) = get(sample_app(), "/api/songs/recent?limit=3abc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids_of(&songs), vec!["1", "2", "3"]);

        let (_, songs) = get(sample_app(), "/api/songs/recent?limit=2.5").await;
        assert_eq!(ids_of(&songs), vec!["1", "2"]);

        let (_, songs) = get(sample_app(), "/api/songs/recent?limit=-1").await;
        assert_eq!(songs, json!([]));
    }

    #[tokio::test]
    async fn repeated_limit_uses_the_first() {
        let (status, songs) = get(sample_app(), "/api/songs/recent?limit=1&limit=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids_of(&songs), vec!["1"]);
    }

    #[tokio::test]
    async fn playlists_and_artists_are_listed() {
        let (status, playlists) = get(sample_app(), "/api/playlists").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids_of(&playlists), vec!["1", "2", "3", "4"]);
        assert_eq!(playlists[0]["name"], "Electronic Vibes");
        assert_eq!(playlists[0]["userId"], Value::Null);

        let (status, playlist) = get(sample_app(), "/api/playlists/4").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(playlist["description"], "Timeless jazz standards");

        let (status, artists) = get(sample_app(), "/api/artists").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids_of(&artists).len(), 6);

        let (status, artist) = get(sample_app(), "/api/artists/3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(artist, json!({ "id": "3", "name": "Maya Chen", "image": null }));
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let cases = [
            ("/api/playlists/99", "Playlist not found"),
            ("/api/songs/99", "Song not found"),
            ("/api/artists/99", "Artist not found"),
        ];

        for (uri, message) in cases {
            let (status, body) = get(sample_app(), uri).await;

            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, json!({ "message": message }));
        }
    }

    #[tokio::test]
    async fn catalog_faults_are_internal_errors() {
        let cases = [
            ("/api/playlists", "Failed to fetch playlists"),
            ("/api/playlists/1", "Failed to fetch playlist"),
            ("/api/songs", "Failed to fetch songs"),
            ("/api/songs/recent", "Failed to fetch recent songs"),
            ("/api/songs/1", "Failed to fetch song"),
            ("/api/artists", "Failed to fetch artists"),
            ("/api/artists/1", "Failed to fetch artist"),
        ];

        for (uri, message) in cases {
            let app = app(Arc::new(FailingCatalog), &ServerConfig::default());
            let (status, body) = get(app, uri).await;

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, json!({ "message": message }));
        }
    }

    #[tokio::test]
    async fn api_docs_describe_endpoints() {
        let (status, docs) = get(sample_app(), "/api/docs.json").await;

        assert_eq!(status, StatusCode::OK);
        assert!(docs["paths"]["/api/songs/recent"].is_object());
        assert!(docs["paths"]["/api/playlists/{id}"].is_object());
    }

    #[tokio::test]
    async fn client_files_are_served_with_index_fallback() {
        let dir = std::env::temp_dir().join(format!("wavefy-client-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.html"), "<html>wavefy</html>").unwrap();
        fs::write(dir.join("app.js"), "console.log(1)").unwrap();

        let config = ServerConfig {
            static_dir: Some(dir.clone()),
            ..Default::default()
        };
        let app = app(Arc::new(MemoryCatalog::with_sample_data()), &config);

        let (status, body) = get_raw(app.clone(), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"console.log(1)");

        let (status, body) = get_raw(app.clone(), "/playlists/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<html>wavefy</html>");

        let (status, _) = get(app, "/api/songs/1").await;
        assert_eq!(status, StatusCode::OK);

        fs::remove_dir_all(dir).unwrap();
    }
}
