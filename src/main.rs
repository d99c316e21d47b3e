use std::net::SocketAddr;

use pizza_server::config::{establish_connection, AppConfig};
use pizza_server::domain::health::init_start_time;
use pizza_server::utils::logging::init_logging;
use pizza_server::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    // 2. 로깅 초기화 (guard는 main이 끝날 때까지 유지)
    let _log_guard = init_logging(&config.log_dir);
    init_start_time();

    // 3. 데이터베이스 연결
    let db = establish_connection(&config.database_url, config.schema_update).await?;

    // 4. 라우터 설정
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let app = create_app(AppState { db, config });

    // 5. 서버 실행
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
