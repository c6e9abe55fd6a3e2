//! Memo skill HTTP endpoint.

use memo_api::server::{self, AppState};
use memo_core::Skill;
use memo_store::{HttpAttributeStore, InMemoryAttributeStore};
use memo_types::AttributeStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store: Arc<dyn AttributeStore> = if std::env::var("MEMO_STORE_URL").is_ok() {
        Arc::new(HttpAttributeStore::from_env()?)
    } else {
        tracing::warn!("MEMO_STORE_URL not set, memos will not survive a restart");
        Arc::new(InMemoryAttributeStore::new())
    };

    let state = Arc::new(AppState {
        skill: Skill::new(store),
        application_id: std::env::var("MEMO_SKILL_ID").ok(),
    });

    let app = server::router(state);
    let addr: SocketAddr = std::env::var("MEMO_LISTEN")
        .unwrap_or_else(|_| "0.0.0.0:8002".to_string())
        .parse()?;
    tracing::info!("memo skill listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(addr).await?,
        app.into_make_service(),
    )
    .await?;
    Ok(())
}
