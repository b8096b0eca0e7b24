use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use domain::{Channel, RegisterChannel, UpdateVerification};

use crate::error::AppResult;
use crate::state::AppState;

/// Register a YouTube channel
#[utoipa::path(
    post,
    path = "/api/channels",
    tag = "channels",
    request_body = RegisterChannel,
    responses(
        (status = 201, description = "Channel registered", body = Channel),
        (status = 400, description = "Blank channel ID or malformed body"),
        (status = 404, description = "Channel does not exist on YouTube"),
        (status = 409, description = "Channel already registered"),
        (status = 502, description = "YouTube API unreachable"),
        (status = 503, description = "YouTube API key or quota problem")
    )
)]
pub async fn add_channel(
    State(state): State<AppState>,
    payload: Result<Json<RegisterChannel>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Channel>)> {
    let Json(payload) = payload?;
    let channel = state
        .services
        .channels
        .add_channel(&payload.channel_id)
        .await?;
    Ok((StatusCode::CREATED, Json(channel)))
}

/// Get a registered channel
#[utoipa::path(
    get,
    path = "/api/channels/{channel_id}",
    tag = "channels",
    params(
        ("channel_id" = String, Path, description = "YouTube channel ID")
    ),
    responses(
        (status = 200, description = "Registered channel", body = Channel),
        (status = 404, description = "Channel not registered")
    )
)]
pub async fn get_channel(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
) -> AppResult<Json<Channel>> {
    let channel = state.services.channels.get_channel(&channel_id).await?;
    Ok(Json(channel))
}

/// Set a channel's verification flag
#[utoipa::path(
    put,
    path = "/api/channels/{channel_id}/verify",
    tag = "channels",
    request_body = UpdateVerification,
    params(
        ("channel_id" = String, Path, description = "YouTube channel ID")
    ),
    responses(
        (status = 200, description = "Updated channel", body = Channel),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "Channel not registered")
    )
)]
pub async fn update_verification(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
    payload: Result<Json<UpdateVerification>, JsonRejection>,
) -> AppResult<Json<Channel>> {
    let Json(payload) = payload?;
    let channel = state
        .services
        .channels
        .set_verification(&channel_id, payload.is_verified)
        .await?;
    Ok(Json(channel))
}

/// List channels awaiting verification
#[utoipa::path(
    get,
    path = "/api/channels/unverified",
    tag = "channels",
    responses(
        (status = 200, description = "Unverified channels", body = Vec<Channel>)
    )
)]
pub async fn get_unverified_channels(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Channel>>> {
    let channels = state.services.channels.list_unverified().await?;
    Ok(Json(channels))
}
