/// The type used for identifiers in the catalog.
pub type EntityId = String;

/// A wavefy account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub id: EntityId,
    pub username: String,
    /// Stored exactly as it was given
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistData {
    pub id: EntityId,
    pub name: String,
    /// An image URL
    pub image: Option<String>,
}

/// A song in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongData {
    pub id: EntityId,
    pub title: String,
    /// The artist performing this song.
    /// Note: this is not guaranteed to point at an existing artist.
    pub artist_id: Option<EntityId>,
    /// Length of the song in whole seconds
    pub duration: u32,
    pub image: Option<String>,
    /// Where the audio of this song can be fetched from
    pub audio_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistData {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    /// The owner of the playlist, if any
    pub user_id: Option<EntityId>,
}

/// The outcome of looking up the artist of a song
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedArtist {
    Known(ArtistData),
    /// The song has no artist, or its artist doesn't exist
    Unknown,
}

/// A song along with its resolved artist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongWithArtistData {
    pub song: SongData,
    pub artist: ResolvedArtist,
}

impl ResolvedArtist {
    /// Returns the artist, if it was found
    pub fn known(&self) -> Option<&ArtistData> {
        match self {
            Self::Known(artist) => Some(artist),
            Self::Unknown => None,
        }
    }
}

impl From<Option<ArtistData>> for ResolvedArtist {
    fn from(value: Option<ArtistData>) -> Self {
        value.map(Self::Known).unwrap_or(Self::Unknown)
    }
}
