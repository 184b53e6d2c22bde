use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::{artists, playlists, serialized, songs};

#[derive(OpenApi)]
#[openapi(
    paths(
        playlists::list_playlists,
        playlists::playlist,
        songs::list_songs,
        songs::recent_songs,
        songs::song,
        artists::list_artists,
        artists::artist,
    ),
    components(schemas(
        serialized::Playlist,
        serialized::SongWithArtist,
        serialized::Artist,
        serialized::ErrorMessage,
    )),
    tags(
        (name = "playlists"),
        (name = "songs"),
        (name = "artists"),
    ),
    info(
        title = "wavefy API",
        description = "wavefy-server exposes the playlists, songs, and artists of the catalog"
    )
)]
pub struct ApiDoc;

pub async fn docs() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
