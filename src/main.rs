use anyhow::Context;
use birdshop::{
    app::birds::seed::seed_birds,
    infrastructure::{
        config::load_config,
        database::{redact_url, DatabaseManager},
        logger::Logger,
    },
    build_router, AppState, SqlBirdRepository,
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("Failed to load configuration")?;

    // 初始化日志
    Logger::init(&config.logging);

    info!("Starting birdshop server...");
    info!("Connecting to database: {}", redact_url(&config.database.url));

    // 初始化数据库
    let database = DatabaseManager::new(&config.database).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        e
    })?;
    database.init_schema().await?;

    let repository = SqlBirdRepository::new(database.get_pool().clone());

    // 示例数据写入完成后才开始监听
    seed_birds(&repository, config.database.seed).await?;

    let app = build_router(AppState::new(repository), config.http.timeout());

    let listener = TcpListener::bind(config.http.socket_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.http.socket_addr()))?;
    let addr = listener.local_addr()?;

    info!("🚀 Birdshop server running on http://{}", addr);
    info!("📖 Available endpoints:");
    info!("   GET    /health      - Health check");
    info!("   GET    /api/birds   - List birds");
    info!("   POST   /api/birds   - Create bird");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
