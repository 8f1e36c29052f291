use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ship_registry::config::environment::{EnvironmentConfig, StorageBackend};
use ship_registry::database::DatabaseConnection;
use ship_registry::repositories::{InMemoryShipStore, PgShipRepository, ShipStore};
use ship_registry::routes::create_app_router;
use ship_registry::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🚀 Ship Registry API");
    info!("================================================");

    let config = EnvironmentConfig::from_env()?;

    // Inicializar almacenamiento
    let store: Arc<dyn ShipStore> = match config.storage_backend {
        StorageBackend::Postgres => {
            let db_connection = match DatabaseConnection::new_default().await {
                Ok(conn) => conn,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {:#}", e);
                    return Err(e);
                }
            };
            Arc::new(PgShipRepository::new(db_connection.pool().clone()))
        }
        StorageBackend::Memory => {
            info!("💾 Usando almacenamiento en memoria");
            Arc::new(InMemoryShipStore::new())
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app_router(AppState::new(store, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("   GET    /rest/ships - Listar ships (filtros, orden, paginación)");
    info!("   GET    /rest/ships/count - Contar ships filtrados");
    info!("   POST   /rest/ships - Crear ship");
    info!("   GET    /rest/ships/:id - Obtener ship");
    info!("   POST   /rest/ships/:id - Actualizar ship");
    info!("   DELETE /rest/ships/:id - Eliminar ship");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
