use std::sync::Arc;

use userauth::{app, config::AppConfig, db, users::PgUserStore, AppState};

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "userauth=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = config.bind_addr();

    let pool = db::connect(&config).await?;
    db::migrate(&pool).await?;

    let state = AppState::new(config, Arc::new(PgUserStore::new(pool.clone())));
    let result = app::serve(app::build_app(state), &addr).await;

    pool.close().await;
    tracing::info!("database pool closed");
    result
}
