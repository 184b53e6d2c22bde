use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

mod data;
pub use data::*;

mod memory;
pub use memory::*;

pub type Result<T> = std::result::Result<T, CatalogError>;
pub type SharedCatalog = Arc<dyn Catalog>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// An unknown or internal error happened in the catalog backend
    #[error(transparent)]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl CatalogError {
    /// Wraps any error as an internal catalog error
    pub fn internal<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Internal(error.into())
    }
}

/// Represents a type that can store and fetch wavefy catalog data.
///
/// Lookups resolve to `Ok(None)` when nothing is stored under the given key,
/// errors are reserved for faults in the backend itself.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn user_by_id(&self, user_id: &str) -> Result<Option<UserData>>;
    async fn user_by_username(&self, username: &str) -> Result<Option<UserData>>;
    async fn create_user(&self, new_user: NewUser) -> Result<UserData>;

    async fn artist_by_id(&self, artist_id: &str) -> Result<Option<ArtistData>>;
    async fn create_artist(&self, new_artist: NewArtist) -> Result<ArtistData>;
    async fn list_artists(&self) -> Result<Vec<ArtistData>>;

    async fn song_by_id(&self, song_id: &str) -> Result<Option<SongData>>;
    async fn song_with_artist(&self, song_id: &str) -> Result<Option<SongWithArtistData>>;
    async fn create_song(&self, new_song: NewSong) -> Result<SongData>;
    async fn list_songs(&self) -> Result<Vec<SongWithArtistData>>;
    /// Returns the first `limit` songs in storage order.
    async fn recent_songs(&self, limit: usize) -> Result<Vec<SongWithArtistData>>;

    async fn playlist_by_id(&self, playlist_id: &str) -> Result<Option<PlaylistData>>;
    async fn create_playlist(&self, new_playlist: NewPlaylist) -> Result<PlaylistData>;
    async fn list_playlists(&self) -> Result<Vec<PlaylistData>>;
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct NewArtist {
    pub name: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSong {
    pub title: String,
    pub artist_id: Option<EntityId>,
    pub duration: u32,
    pub image: Option<String>,
    pub audio_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewPlaylist {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    /// The owner of the new playlist
    pub user_id: Option<EntityId>,
}
