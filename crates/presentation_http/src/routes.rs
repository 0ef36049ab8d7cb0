//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let json_limit = DefaultBodyLimit::max(state.config.server.max_body_size_json_bytes);
    let audio_limit = DefaultBodyLimit::max(state.config.server.max_body_size_audio_bytes);

    let api = Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Chat API (v1)
        .route("/v1/chat", post(handlers::chat::chat))
        .route("/v1/chat/preview", post(handlers::chat::preview_voice))
        .route(
            "/v1/chat/{conversation_id}/history",
            get(handlers::chat::get_history).delete(handlers::chat::clear_history),
        )
        // Narration API (v1)
        .route("/v1/narration", post(handlers::narration::narrate))
        // Voices API (v1)
        .route("/v1/voices", get(handlers::voices::list_voices))
        .route("/v1/voices/cloned", get(handlers::voices::list_cloned_voices))
        // Reader API (v1)
        .route("/v1/reader", post(handlers::reader::read_document))
        .layer(json_limit);

    // Audio uploads get a larger body budget than plain JSON requests
    let uploads = Router::new()
        .route("/v1/chat/voice", post(handlers::chat::voice_chat))
        .route("/v1/voices/clone", post(handlers::voices::clone_voice))
        .layer(audio_limit);

    Router::new().merge(api).merge(uploads).with_state(state)
}
