use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use parking_lot::RwLock;

use crate::{
    util::new_id, ArtistData, Catalog, EntityId, NewArtist, NewPlaylist, NewSong, NewUser,
    PlaylistData, Result, SongData, SongWithArtistData, UserData,
};

/// Rows keyed by id, iterated in the order they were first inserted.
struct Table<T> {
    order: Vec<EntityId>,
    rows: HashMap<EntityId, T>,
}

impl<T> Table<T>
where
    T: Clone,
{
    fn get(&self, id: &str) -> Option<T> {
        self.rows.get(id).cloned()
    }

    /// Inserts a row, replacing an existing row with the same id in place.
    fn insert(&mut self, id: EntityId, row: T) {
        if self.rows.insert(id.clone(), row).is_none() {
            self.order.push(id);
        }
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.rows.get(id))
    }

    fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.iter().find(|row| predicate(*row)).cloned()
    }

    fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            rows: HashMap::new(),
        }
    }
}

/// An in-memory catalog, nothing survives the process.
#[derive(Default)]
pub struct MemoryCatalog {
    users: RwLock<Table<UserData>>,
    artists: RwLock<Table<ArtistData>>,
    songs: RwLock<Table<SongData>>,
    playlists: RwLock<Table<PlaylistData>>,
}

impl MemoryCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert_artist(&self, artist: ArtistData) {
        self.artists.write().insert(artist.id.clone(), artist);
    }

    pub(crate) fn insert_song(&self, song: SongData) {
        self.songs.write().insert(song.id.clone(), song);
    }

    pub(crate) fn insert_playlist(&self, playlist: PlaylistData) {
        self.playlists.write().insert(playlist.id.clone(), playlist);
    }

    /// Returns the number of users, artists, songs, and playlists stored
    pub fn counts(&self) -> (usize, usize, usize, usize) {
        (
            self.users.read().len(),
            self.artists.read().len(),
            self.songs.read().len(),
            self.playlists.read().len(),
        )
    }

    /// Attaches the artist of each song, in the order given.
    fn resolve(&self, songs: Vec<SongData>) -> Vec<SongWithArtistData> {
        let artists = self.artists.read();

        songs
            .into_iter()
            .map(|song| {
                let artist = song
                    .artist_id
                    .as_deref()
                    .and_then(|id| artists.get(id))
                    .into();

                SongWithArtistData { song, artist }
            })
            .collect()
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn user_by_id(&self, user_id: &str) -> Result<Option<UserData>> {
        Ok(self.users.read().get(user_id))
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<UserData>> {
        Ok(self.users.read().find(|u| u.username == username))
    }

    async fn create_user(&self, new_user: NewUser) -> Result<UserData> {
        let user = UserData {
            id: new_id(),
            username: new_user.username,
            password: new_user.password,
        };

        self.users.write().insert(user.id.clone(), user.clone());
        debug!("Created user {} ({})", user.username, user.id);

        Ok(user)
    }

    async fn artist_by_id(&self, artist_id: &str) -> Result<Option<ArtistData>> {
        Ok(self.artists.read().get(artist_id))
    }

    async fn create_artist(&self, new_artist: NewArtist) -> Result<ArtistData> {
        let artist = ArtistData {
            id: new_id(),
            name: new_artist.name,
            image: new_artist.image,
        };

        self.insert_artist(artist.clone());
        debug!("Created artist {} ({})", artist.name, artist.id);

        Ok(artist)
    }

    async fn list_artists(&self) -> Result<Vec<ArtistData>> {
        Ok(self.artists.read().to_vec())
    }

    async fn song_by_id(&self, song_id: &str) -> Result<Option<SongData>> {
        Ok(self.songs.read().get(song_id))
    }

    async fn song_with_artist(&self, song_id: &str) -> Result<Option<SongWithArtistData>> {
        let song = self.songs.read().get(song_id);

        Ok(song.and_then(|song| self.resolve(vec![song]).pop()))
    }

    async fn create_song(&self, new_song: NewSong) -> Result<SongData> {
        let song = SongData {
            id: new_id(),
            title: new_song.title,
            artist_id: new_song.artist_id,
            duration: new_song.duration,
            image: new_song.image,
            audio_url: new_song.audio_url,
        };

        self.insert_song(song.clone());
        debug!("Created song {} ({})", song.title, song.id);

        Ok(song)
    }

    async fn list_songs(&self) -> Result<Vec<SongWithArtistData>> {
        let songs = self.songs.read().to_vec();

        Ok(self.resolve(songs))
    }

    async fn recent_songs(&self, limit: usize) -> Result<Vec<SongWithArtistData>> {
        // There is no timestamp on songs, so storage order is all we have
        let songs: Vec<_> = self.songs.read().iter().take(limit).cloned().collect();

        Ok(self.resolve(songs))
    }

    async fn playlist_by_id(&self, playlist_id: &str) -> Result<Option<PlaylistData>> {
        Ok(self.playlists.read().get(playlist_id))
    }

    async fn create_playlist(&self, new_playlist: NewPlaylist) -> Result<PlaylistData> {
        let playlist = PlaylistData {
            id: new_id(),
            name: new_playlist.name,
            description: new_playlist.description,
            image: new_playlist.image,
            user_id: new_playlist.user_id,
        };

        self.insert_playlist(playlist.clone());
        debug!("Created playlist {} ({})", playlist.name, playlist.id);

        Ok(playlist)
    }

    async fn list_playlists(&self) -> Result<Vec<PlaylistData>> {
        Ok(self.playlists.read().to_vec())
    }
}
