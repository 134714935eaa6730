use anyhow::Context;
use sea_orm::Database;

use corebank::config::BankConfig;
use corebank::router::build_router;
use corebank::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    corebank_core::tracing::init_tracing();

    let config = BankConfig::from_env()?;
    let db = Database::connect(&config.database_url)
        .await
        .context("connecting to the database")?;

    let state = AppState::new(db);
    let router = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "bank service listening");

    axum::serve(listener, router).await.context("serving")?;
    Ok(())
}
