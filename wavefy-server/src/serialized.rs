//! All schemas that are exposed from endpoints are defined here
//! along with the ToSerialized impls

use serde::Serialize;
use utoipa::ToSchema;
use wavefy_catalog::{ArtistData, PlaylistData, ResolvedArtist, SongWithArtistData};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    id: String,
    name: String,
    image: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SongWithArtist {
    id: String,
    title: String,
    artist_id: Option<String>,
    /// Length in whole seconds
    duration: u32,
    image: Option<String>,
    audio_url: Option<String>,
    /// Always present. Songs without a known artist get a placeholder with an empty id.
    artist: Artist,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    id: String,
    name: String,
    description: Option<String>,
    image: Option<String>,
    user_id: Option<String>,
}

/// The body of every error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorMessage {
    message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Artist {
    const UNKNOWN_NAME: &'static str = "Unknown Artist";

    /// The placeholder used when a song's artist can't be resolved
    fn unknown() -> Self {
        Self {
            id: String::new(),
            name: Self::UNKNOWN_NAME.to_string(),
            image: None,
        }
    }
}

/// Helper trait to convert any type into a serialized version
pub trait ToSerialized<T>
where
    T: Serialize,
{
    fn to_serialized(&self) -> T;
}

impl<I, O> ToSerialized<Vec<O>> for Vec<I>
where
    I: ToSerialized<O>,
    O: Serialize,
{
    fn to_serialized(&self) -> Vec<O> {
        self.iter().map(|x| x.to_serialized()).collect()
    }
}

impl ToSerialized<Artist> for ArtistData {
    fn to_serialized(&self) -> Artist {
        Artist {
            id: self.id.clone(),
            name: self.name.clone(),
            image: self.image.clone(),
        }
    }
}

impl ToSerialized<Artist> for ResolvedArtist {
    fn to_serialized(&self) -> Artist {
        match self {
            ResolvedArtist::Known(artist) => artist.to_serialized(),
            ResolvedArtist::Unknown => Artist::unknown(),
        }
    }
}

impl ToSerialized<SongWithArtist> for SongWithArtistData {
    fn to_serialized(&self) -> SongWithArtist {
        let song = &self.song;

        SongWithArtist {
            id: song.id.clone(),
            title: song.title.clone(),
            artist_id: song.artist_id.clone(),
            duration: song.duration,
            image: song.image.clone(),
            audio_url: song.audio_url.clone(),
            artist: self.artist.to_serialized(),
        }
    }
}

impl ToSerialized<Playlist> for PlaylistData {
    fn to_serialized(&self) -> Playlist {
        Playlist {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            user_id: self.user_id.clone(),
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::{json, to_value};
    use wavefy_catalog::{ResolvedArtist, SongData, SongWithArtistData};

    use super::ToSerialized;

    fn song(artist: ResolvedArtist) -> SongWithArtistData {
        SongWithArtistData {
            song: SongData {
                id: "abc".to_string(),
                title: "Lost".to_string(),
                artist_id: Some("gone".to_string()),
                duration: 61,
                image: None,
                audio_url: None,
            },
            artist,
        }
    }

    #[test]
    fn unknown_artist_serializes_to_placeholder() {
        let serialized = song(ResolvedArtist::Unknown).to_serialized();

        assert_eq!(
            to_value(serialized).unwrap(),
            json!({
                "id": "abc",
                "title": "Lost",
                "artistId": "gone",
                "duration": 61,
                "image": null,
                "audioUrl": null,
                "artist": { "id": "", "name": "Unknown Artist", "image": null }
            })
        );
    }
}
