//! Chat relay handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use polyglot_core::prompt::build_prompt;
use serde_json::Value;
use tracing::{debug, warn};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{ChatRequest, ChatResponse};

/// Reply for a missing or blank `text`.
pub const EMPTY_MESSAGE: &str = "Please provide a message";

/// Reply for a body that is not a JSON object.
pub const INVALID_BODY: &str = "Invalid JSON body";

/// `POST /chat` — relay `text` to the generation service and reply in `language`.
///
/// The body is parsed as JSON regardless of `Content-Type`. Exactly one
/// generation call is made per request that passes validation; failures are
/// not retried.
pub async fn chat_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<ChatResponse>> {
    let request = parse_request(&body)?;

    if request.is_empty() {
        debug!("rejecting chat request without text");
        return Err(AppError::Validation(EMPTY_MESSAGE.into()));
    }

    let prompt = build_prompt(&request.language, &request.text);
    debug!(
        language = %request.language,
        model = state.generator.model(),
        "relaying chat message"
    );

    let reply = state.generator.generate(&prompt).await.map_err(|e| {
        warn!(model = state.generator.model(), "generation failed: {e}");
        AppError::from(e)
    })?;

    Ok(Json(ChatResponse {
        response: reply.trim().to_string(),
    }))
}

fn parse_request(body: &[u8]) -> AppResult<ChatRequest> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => Ok(ChatRequest::from_object(&fields)),
        _ => {
            debug!("rejecting chat request with non-object body");
            Err(AppError::Validation(INVALID_BODY.into()))
        }
    }
}
