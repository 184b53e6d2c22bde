//! The sample catalog served when wavefy starts

use crate::{ArtistData, MemoryCatalog, PlaylistData, SongData};

const ARTISTS: [(&str, &str); 6] = [
    ("1", "Luna Rodriguez"),
    ("2", "Storm Riders"),
    ("3", "Maya Chen"),
    ("4", "DJ Syntax"),
    ("5", "Echo Collective"),
    ("6", "River Folk"),
];

// id, title, artist id, duration in seconds, image
const SONGS: [(&str, &str, &str, u32, &str); 6] = [
    (
        "1",
        "Midnight Dreams",
        "1",
        222,
        "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?auto=format&fit=crop&w=400&h=400",
    ),
    (
        "2",
        "Electric Thunder",
        "2",
        255,
        "https://images.unsplash.com/photo-1511735111819-9a3f7709049c?auto=format&fit=crop&w=400&h=400",
    ),
    (
        "3",
        "Soulful Nights",
        "3",
        208,
        "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?auto=format&fit=crop&w=400&h=400",
    ),
    (
        "4",
        "Neon Pulse",
        "4",
        302,
        "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?auto=format&fit=crop&w=400&h=400",
    ),
    (
        "5",
        "Symphonic Dreams",
        "5",
        378,
        "https://images.unsplash.com/photo-1506157786151-b8491531f063?auto=format&fit=crop&w=400&h=400",
    ),
    (
        "6",
        "Woodland Tales",
        "6",
        273,
        "https://images.unsplash.com/photo-1415201364774-f6f0bb35f28f?auto=format&fit=crop&w=400&h=400",
    ),
];

// id, name, description, image
const PLAYLISTS: [(&str, &str, &str, &str); 4] = [
    (
        "1",
        "Electronic Vibes",
        "Best electronic beats",
        "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?auto=format&fit=crop&w=400&h=400",
    ),
    (
        "2",
        "Hip Hop Hits",
        "Top rap and hip hop tracks",
        "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?auto=format&fit=crop&w=400&h=400",
    ),
    (
        "3",
        "Indie Rock",
        "Alternative and indie favorites",
        "https://images.unsplash.com/photo-1506157786151-b8491531f063?auto=format&fit=crop&w=400&h=400",
    ),
    (
        "4",
        "Jazz Classics",
        "Timeless jazz standards",
        "https://images.unsplash.com/photo-1415201364774-f6f0bb35f28f?auto=format&fit=crop&w=400&h=400",
    ),
];

impl MemoryCatalog {
    /// Creates a catalog pre-filled with sample artists, songs, and playlists.
    pub fn with_sample_data() -> Self {
        let catalog = Self::new();

        for (id, name) in ARTISTS {
            catalog.insert_artist(ArtistData {
                id: id.to_string(),
                name: name.to_string(),
                image: None,
            });
        }

        for (id, title, artist_id, duration, image) in SONGS {
            catalog.insert_song(SongData {
                id: id.to_string(),
                title: title.to_string(),
                artist_id: Some(artist_id.to_string()),
                duration,
                image: Some(image.to_string()),
                audio_url: None,
            });
        }

        for (id, name, description, image) in PLAYLISTS {
            catalog.insert_playlist(PlaylistData {
                id: id.to_string(),
                name: name.to_string(),
                description: Some(description.to_string()),
                image: Some(image.to_string()),
                user_id: None,
            });
        }

        catalog
    }
}
