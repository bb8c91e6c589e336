use std::net::SocketAddr;

use axum::http::{HeaderValue, Method};
use configs::{AppConfig, CorsConfig, ServerConfig};
use migration::MigratorTrait;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Exact-origin CORS for the admin panel and the public site.
pub fn build_cors(cfg: &CorsConfig) -> Result<CorsLayer, StartupError> {
    let origins = cfg
        .allowed_origins
        .iter()
        .map(|o| HeaderValue::from_str(o).map_err(|e| StartupError::InvalidConfig(format!("cors origin `{o}`: {e}"))))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any))
}

pub fn bind_addr(cfg: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.host, cfg.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address {}:{}: {e}", cfg.host, cfg.port)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}

/// Connect, migrate, and serve until Ctrl+C or SIGTERM.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None).await?;
        info!("migrations applied");
    }

    let state = AppState::with_database(db, &cfg)?;
    let app = routes::build_router(state, build_cors(&cfg.cors)?);

    let addr = bind_addr(&cfg.server)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("server drained");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_rejects_unparseable_origin() {
        let cfg = CorsConfig { allowed_origins: vec!["https://ok.example".into(), "bad\norigin".into()] };
        assert!(matches!(build_cors(&cfg), Err(StartupError::InvalidConfig(_))));
        assert!(build_cors(&CorsConfig::default()).is_ok());
    }

    #[test]
    fn bind_addr_from_server_section() {
        let cfg = ServerConfig { host: "127.0.0.1".into(), port: 9090, worker_threads: None };
        assert_eq!(bind_addr(&cfg).unwrap().port(), 9090);
        let bad = ServerConfig { host: "not a host".into(), ..cfg };
        assert!(bind_addr(&bad).is_err());
    }
}
