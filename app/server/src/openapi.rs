use utoipa::OpenApi;

use domain::{Channel, RegisterChannel, UpdateVerification};

use crate::api::handlers::channels;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HoloClip Channel API",
        version = "1.0.0"
    ),
    tags(
        (name = "channels", description = "Channel registration and verification endpoints")
    ),
    paths(
        channels::add_channel,
        channels::get_channel,
        channels::update_verification,
        channels::get_unverified_channels,
    ),
    components(schemas(Channel, RegisterChannel, UpdateVerification))
)]
pub struct ApiDoc;
