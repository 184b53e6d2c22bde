use axum::{
    extract::{Path, State},
    routing::get,
    Json,
};

use crate::{
    context::ServerContext,
    errors::{FetchResult, FoundOr, ServerResult},
    serialized::{Artist, ToSerialized},
    Router,
};

#[utoipa::path(
    get,
    path = "/api/artists",
    tag = "artists",
    responses(
        (status = 200, body = Vec<Artist>),
        (status = 500, body = crate::serialized::ErrorMessage)
    )
)]
async fn list_artists(State(context): State<ServerContext>) -> ServerResult<Json<Vec<Artist>>> {
    let artists = context
        .catalog
        .list_artists()
        .await
        .or_fetch_error("artists")?;

    Ok(Json(artists.to_serialized()))
}

#[utoipa::path(
    get,
    path = "/api/artists/{id}",
    tag = "artists",
    params(
        ("id" = String, Path, description = "The id of the artist")
    ),
    responses(
        (status = 200, body = Artist),
        (status = 404, body = crate::serialized::ErrorMessage),
        (status = 500, body = crate::serialized::ErrorMessage)
    )
)]
async fn artist(
    State(context): State<ServerContext>,
    Path(id): Path<String>,
) -> ServerResult<Json<Artist>> {
    let artist = context
        .catalog
        .artist_by_id(&id)
        .await
        .or_fetch_error("artist")?
        .found_or("Artist")?;

    Ok(Json(artist.to_serialized()))
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_artists))
        .route("/:id", get(artist))
}
