use axum::{Json, extract::State};

use crate::{
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let reply = state.chat.generate_reply(payload.message.as_deref());
    Json(ChatResponse { reply })
}
