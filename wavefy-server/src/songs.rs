use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json,
};
use utoipa::IntoParams;

use crate::{
    context::ServerContext,
    errors::{FetchResult, FoundOr, ServerResult},
    serialized::{SongWithArtist, ToSerialized},
    Router,
};

/// How many songs are returned from `/recent` when no limit is given
pub const DEFAULT_RECENT_LIMIT: usize = 10;

#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecentSongsQuery {
    /// The maximum number of songs to return. Only the leading integer is read,
    /// so `3abc` means 3. Empty means the default, anything without digits or negative returns no songs.
    #[param(value_type = Option<u32>)]
    limit: Option<String>,
}

impl RecentSongsQuery {
    /// Picks the first `limit` out of the query string, repeats are ignored
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let limit = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "limit").then_some(value));

        Self { limit }
    }

    fn limit(&self) -> usize {
        match self.limit.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_RECENT_LIMIT,
            Some(limit) => leading_integer(limit).unwrap_or(0),
        }
    }
}

/// Reads the optional sign and the digits at the start of `value`, ignoring whatever follows.
/// Negative values count as zero, values too large for a `usize` saturate.
fn leading_integer(value: &str) -> Option<usize> {
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();

    if digits == 0 {
        return None;
    }

    if negative {
        return Some(0);
    }

    Some(rest[..digits].parse().unwrap_or(usize::MAX))
}

#[utoipa::path(
    get,
    path = "/api/songs",
    tag = "songs",
    responses(
        (status = 200, body = Vec<SongWithArtist>),
        (status = 500, body = crate::serialized::ErrorMessage)
    )
)]
async fn list_songs(State(context): State<ServerContext>) -> ServerResult<Json<Vec<SongWithArtist>>> {
    let songs = context.catalog.list_songs().await.or_fetch_error("songs")?;

    Ok(Json(songs.to_serialized()))
}

#[utoipa::path(
    get,
    path = "/api/songs/recent",
    tag = "songs",
    params(RecentSongsQuery),
    responses(
        (status = 200, description = "The first songs of the catalog, in storage order", body = Vec<SongWithArtist>),
        (status = 500, body = crate::serialized::ErrorMessage)
    )
)]
async fn recent_songs(
    State(context): State<ServerContext>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ServerResult<Json<Vec<SongWithArtist>>> {
    let query = RecentSongsQuery::from_pairs(pairs);
    let songs = context
        .catalog
        .recent_songs(query.limit())
        .await
        .or_fetch_error("recent songs")?;

    Ok(Json(songs.to_serialized()))
}

#[utoipa::path(
    get,
    path = "/api/songs/{id}",
    tag = "songs",
    params(
        ("id" = String, Path, description = "The id of the song")
    ),
    responses(
        (status = 200, body = SongWithArtist),
        (status = 404, body = crate::serialized::ErrorMessage),
        (status = 500, body = crate::serialized::ErrorMessage)
    )
)]
async fn song(
    State(context): State<ServerContext>,
    Path(id): Path<String>,
) -> ServerResult<Json<SongWithArtist>> {
    let song = context
        .catalog
        .song_with_artist(&id)
        .await
        .or_fetch_error("song")?
        .found_or("Song")?;

    Ok(Json(song.to_serialized()))
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_songs))
        .route("/recent", get(recent_songs))
        .route("/:id", get(song))
}
