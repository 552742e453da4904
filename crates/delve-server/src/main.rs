use std::sync::Arc;

use delve::agent::Agent;
use delve::providers::openai::OpenAiProvider;
use delve::search::tavily::TavilyProvider;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod configuration;
mod error;
mod routes;
mod state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Values already in the environment take precedence over .env
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "delve=debug,delve_server=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = configuration::Settings::new()?;
    let addr = settings.server.socket_addr()?;

    let provider = OpenAiProvider::new(settings.provider.into_config())?;
    let search = TavilyProvider::new(settings.search.into_config())?;
    let agent = Agent::new(
        Arc::new(provider),
        Arc::new(search),
        settings.agent.into_config(),
    )?;
    let state = state::AppState::new(agent);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::configure(state, &settings.server.static_dir)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
