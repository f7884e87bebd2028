use axum::{Json, extract::State};
use tracing::warn;

use crate::{
    message::{DescriptionOutcome, DescriptionRequest},
    state::SharedState,
};

/// Always answers 200; failures only change the payload key.
pub async fn generate_description_handler(
    State(state): State<SharedState>,
    Json(payload): Json<DescriptionRequest>,
) -> Json<DescriptionOutcome> {
    let result = state
        .descriptions
        .generate(payload.title.as_deref(), payload.description.as_deref());

    if let Err(err) = &result {
        warn!(error = %err, "description generation failed");
    }

    Json(DescriptionOutcome::from(result))
}
