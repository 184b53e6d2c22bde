use axum::{
    extract::{Path, State},
    routing::get,
    Json,
};

use crate::{
    context::ServerContext,
    errors::{FetchResult, FoundOr, ServerResult},
    serialized::{Playlist, ToSerialized},
    Router,
};

#[utoipa::path(
    get,
    path = "/api/playlists",
    tag = "playlists",
    responses(
        (status = 200, body = Vec<Playlist>),
        (status = 500, body = crate::serialized::ErrorMessage)
    )
)]
async fn list_playlists(State(context): State<ServerContext>) -> ServerResult<Json<Vec<Playlist>>> {
    let playlists = context
        .catalog
        .list_playlists()
        .await
        .or_fetch_error("playlists")?;

    Ok(Json(playlists.to_serialized()))
}

#[utoipa::path(
    get,
    path = "/api/playlists/{id}",
    tag = "playlists",
    params(
        ("id" = String, Path, description = "The id of the playlist")
    ),
    responses(
        (status = 200, body = Playlist),
        (status = 404, body = crate::serialized::ErrorMessage),
        (status = 500, body = crate::serialized::ErrorMessage)
    )
)]
async fn playlist(
    State(context): State<ServerContext>,
    Path(id): Path<String>,
) -> ServerResult<Json<Playlist>> {
    let playlist = context
        .catalog
        .playlist_by_id(&id)
        .await
        .or_fetch_error("playlist")?
        .found_or("Playlist")?;

    Ok(Json(playlist.to_serialized()))
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_playlists))
        .route("/:id", get(playlist))
}
