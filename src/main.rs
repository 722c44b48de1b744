// src/main.rs

use std::sync::Arc;

use anyhow::Context;

use lost_found::application::{router, AppState};
use lost_found::config::AppConfig;
use lost_found::db::{
    create_connection_pool, get_connection, get_database_stats, initialize_database,
    verify_database_integrity,
};
use lost_found::events::{create_event_bus, ReportClosed, ReportDeleted, ReportFiled};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. CONFIGURATION
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    // 2. INFRASTRUCTURE
    let pool = Arc::new(
        create_connection_pool(&config.db_path, config.pool_size)
            .context("Failed to open database")?,
    );

    {
        let conn = get_connection(&pool).context("Failed to get database connection")?;
        initialize_database(&conn).context("Failed to initialize schema")?;
        verify_database_integrity(&conn).context("Database integrity check failed")?;

        let stats = get_database_stats(&conn)?;
        log::info!(
            "Database ready at {} ({} lost, {} found)",
            config.db_path.display(),
            stats.lost_count,
            stats.found_count
        );
    }

    // 3. EVENT HANDLER REGISTRATION
    let event_bus = Arc::new(create_event_bus());
    event_bus.subscribe::<ReportFiled, _>(|e| {
        log::info!("{} report #{} filed", e.kind, e.record_id);
    });
    event_bus.subscribe::<ReportClosed, _>(|e| {
        log::info!("{} report #{} marked {}", e.kind, e.record_id, e.status);
    });
    event_bus.subscribe::<ReportDeleted, _>(|e| {
        log::info!("{} report #{} deleted", e.kind, e.record_id);
    });

    // 4. APPLICATION STATE
    let app = router(AppState::from_pool(pool, event_bus, config.export_dir.clone()));

    // 5. HTTP SERVER
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    log::info!("Lost & Found register listening on http://{}", config.bind_addr);
    log::info!("Saved exports go to {}", config.export_dir.display());
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
