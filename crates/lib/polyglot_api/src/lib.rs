//! # polyglot_api
//!
//! HTTP API library for Polyglot.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use polyglot_core::generation::GenerationService;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers::chat;

/// Route path of the chat relay endpoint.
pub const CHAT_ROUTE: &str = "/chat";

/// Shared application state passed to all handlers.
///
/// Everything in here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Text generation provider.
    pub generator: Arc<dyn GenerationService>,
}

/// Builds the Axum router with all routes and shared state.
///
/// Request bodies are unbounded so that every reply, whatever the message
/// size, keeps the `{"response": ...}` shape.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(CHAT_ROUTE, post(chat::chat_handler))
        .layer(DefaultBodyLimit::disable())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
