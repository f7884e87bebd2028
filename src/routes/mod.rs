// src/routes/mod.rs
pub mod chat;
pub mod description;

use crate::rules::chat::MARKETPLACE_CATEGORIES;
use crate::state::SharedState;
use axum::{
    Json, Router,
    body::Body,
    http::{HeaderValue, Request},
    routing::{get, post},
};
use chat::chat_handler;
use description::generate_description_handler;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/generate-description", post(generate_description_handler))
        .route("/chat", post(chat_handler))
        .route("/categories", get(categories_handler))
        .route("/health", get(|| async { "OK" }))
        .route("/", get(|| async { "YOU ARE CONNECTED " }))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
            let request_id = req
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!("http", method = %req.method(), uri = %req.uri(), request_id)
        }))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

async fn categories_handler() -> Json<Vec<&'static str>> {
    Json(MARKETPLACE_CATEGORIES.to_vec())
}

#[derive(Clone, Copy, Default)]
struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _req: &Request<B>) -> Option<RequestId> {
        let id = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(id))
    }
}
