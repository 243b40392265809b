//! Practice Judge - Application Entry Point

use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use practice_judge::{
    config::CONFIG,
    db,
    history::{HistoryStore, InMemoryHistoryStore},
    judge::{Judge0Client, JudgeClient},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    if CONFIG.server.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Practice Judge server...");

    // The judge credential goes into the client and nowhere else
    let judge: Arc<dyn JudgeClient> = Arc::new(Judge0Client::new(&CONFIG.judge)?);
    tracing::info!(judge = ?CONFIG.judge, "Judge client ready");

    let (history, backend): (Arc<dyn HistoryStore>, &'static str) = match &CONFIG.database {
        Some(database) => (Arc::new(db::connect_history_store(database).await?), "postgres"),
        None => {
            tracing::warn!("DATABASE_URL not set, submission history is kept in memory");
            (Arc::new(InMemoryHistoryStore::new()), "memory")
        }
    };

    // Create application state
    let state = AppState::new(judge, history, backend, CONFIG.clone());
    let app = practice_judge::app(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
