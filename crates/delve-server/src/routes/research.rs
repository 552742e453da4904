use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use delve::outcome::ResearchResponse;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ResearchRequest {
    question: String,
}

// Failures are reported inside the response body, the status is always 200
async fn handler(
    State(state): State<AppState>,
    Json(request): Json<ResearchRequest>,
) -> Json<ResearchResponse> {
    tracing::info!("Research request: {}", request.question);

    let agent = state.agent.clone();
    let question = request.question;
    let outcome = tokio::spawn(async move { agent.research(&question).await }).await;

    match outcome {
        Ok(outcome) => Json(ResearchResponse::from(outcome)),
        Err(e) => {
            tracing::error!("Research task did not finish: {}", e);
            Json(ResearchResponse::failed(format!("Internal error: {}", e)))
        }
    }
}

// Configure routes for this module
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/research", post(handler))
        .with_state(state)
}
