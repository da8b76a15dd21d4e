use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use parcel_tracking::config::environment::EnvironmentConfig;
use parcel_tracking::database::{initialize_schema, DatabaseConnection};
use parcel_tracking::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .init();

    info!("📦 Parcel Tracking API");
    info!("======================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Crear tipos y tablas si todavía no existen
    if let Err(e) = initialize_schema(&pool).await {
        error!("❌ Error inicializando el esquema: {}", e);
        return Err(anyhow::anyhow!("Error de esquema: {}", e));
    }

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());
    let app = build_router(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("👤 Endpoints - Customers:");
    info!("   POST /customers - Crear cliente");
    info!("   GET  /customers - Listar clientes");
    info!("   GET  /customers/:id - Obtener cliente");
    info!("   PUT  /customers/:id - Actualizar cliente");
    info!("📦 Endpoints - Parcels:");
    info!("   POST /parcels - Crear paquete");
    info!("   GET  /parcels - Listar paquetes");
    info!("   GET  /parcels/:tracking_code - Obtener paquete");
    info!("   GET  /parcels/:tracking_code/timeline - Timeline del paquete");
    info!("🚚 Endpoints - Scans:");
    info!("   POST /parcels/:tracking_code/scans - Registrar scan");
    info!("   GET  /parcels/:tracking_code/scans - Listar scans");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
