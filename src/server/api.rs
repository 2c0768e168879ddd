//! HTTP API server implementation

use axum::{
    extract::{Json, State},
    response::Html,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;

use crate::core::client::TranslationClient;
use crate::core::config::ServiceConfig;
use crate::core::models::{ProcessedResult, TranscriptRequest};
use crate::core::processor::TranscriptProcessor;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    processor: TranscriptProcessor,
    started_at: DateTime<Utc>,
}

impl AppState {
    /// State serving requests through `processor`
    pub fn new(processor: TranscriptProcessor) -> Self {
        Self {
            processor,
            started_at: Utc::now(),
        }
    }

    /// Build the processor and its HTTP client from configuration
    pub fn from_config(config: &ServiceConfig) -> anyhow::Result<Self> {
        let translator = TranslationClient::from_config(config)?;
        Ok(Self::new(TranscriptProcessor::new(translator)))
    }

    /// Transcript pipeline used by the handlers
    pub fn processor(&self) -> &TranscriptProcessor {
        &self.processor
    }
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
    started_at: String,
}

/// OpenAPI description of the public routes
#[derive(OpenApi)]
#[openapi(
    paths(process),
    components(schemas(TranscriptRequest, ProcessedResult))
)]
pub struct ApiDoc;

/// Static landing page
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check handler
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at.to_rfc3339(),
    })
}

/// OpenAPI document
async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Clean a transcript and translate it.
///
/// Always answers 200: translation failures are reported inside
/// `translated_text`.
#[utoipa::path(
    post,
    path = "/process",
    request_body = TranscriptRequest,
    responses(
        (status = 200, description = "Cleaned and translated transcript", body = ProcessedResult)
    )
)]
async fn process(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TranscriptRequest>,
) -> Json<ProcessedResult> {
    Json(state.processor.process(&payload).await)
}

/// Build the router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/openapi.json", get(openapi))
        .route("/process", post(process))
        .with_state(Arc::new(state))
}

/// Bind the configured address; hostnames resolve through `ToSocketAddrs`
pub async fn bind_listener(config: &ServiceConfig) -> anyhow::Result<tokio::net::TcpListener> {
    Ok(tokio::net::TcpListener::bind(config.bind_addr()).await?)
}

/// Run the HTTP server
pub async fn run_server(config: ServiceConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(&config)?;
    info!("Translating through {}", state.processor.translator().endpoint());

    let app = build_router(state);

    let listener = bind_listener(&config).await?;

    info!("Starting server on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
