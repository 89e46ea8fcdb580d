use std::net::SocketAddr;

use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use linkshelf::password::PasswordHasher;
use linkshelf::repository::Repositories;
use linkshelf::services::Services;
use linkshelf::state::AppState;
use linkshelf::{config, db, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (embedded defaults -> linkshelf.toml -> env/.env)
    let app_cfg = config::load()?;

    // Logging (stdout + tägliche Datei-Rotation unter logging.directory)
    let log_dir = app_cfg.logging.directory.clone();
    std::fs::create_dir_all(&log_dir).ok();
    let (stdout_nb, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
    let file_appender = tracing_appender::rolling::daily(&log_dir, "linkshelf.log");
    let (file_nb, file_guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{},tower_http=info", app_cfg.logging.level).into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(stdout_nb))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(file_nb))
        .init();
    // Guards am Leben halten (nicht fallen lassen), damit Non-Blocking Writer korrekt flushen
    let _log_guards = (stdout_guard, file_guard);

    // Datenbank: Verbindung einmalig aus der Konfiguration auflösen
    let conn_cfg = app_cfg.database.connection_config()?;
    config::ensure_sqlite_parent_dir(&conn_cfg.url)?;
    let pool = db::connect(&conn_cfg, app_cfg.database.max_connections).await?;

    if app_cfg.database.auto_migrate {
        db::init_db(&pool, conn_cfg.dialect).await?;
    }

    let repositories = Repositories::sql(pool.clone(), conn_cfg.dialect);
    let services = Services::new(repositories, PasswordHasher::default());
    if app_cfg.auth.skip_authentication {
        info!("Authentication is disabled (auth.skip_authentication = true)");
    }
    let state = AppState::new(services, Some(pool), app_cfg.clone());

    // CORS: in Debug permissiv (für lokale Entwicklung mit separatem Frontend)
    let app = routes::router(state);
    let app = if cfg!(debug_assertions) { app.layer(CorsLayer::permissive()) } else { app };

    let host = app_cfg.server.host.clone();
    let port = app_cfg.server.port;
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid listen addr {}:{} - {}", host, port, e))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Linkshelf listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = term.recv() => {},
                }
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("Shutdown signal received. Stopping server...");
}
