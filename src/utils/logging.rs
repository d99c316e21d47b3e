//! 로깅 초기화 모듈
//!
//! stdout과 일별 로그 파일에 JSON 형식으로 동시 출력합니다.

use std::path::Path;

use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,pizza_server=debug,sea_orm=info";
const LOG_FILE_PREFIX: &str = "pizza-server.log";

/// 로깅 시스템을 초기화합니다.
///
/// `RUST_LOG`가 없으면 `info,pizza_server=debug`를 사용합니다.
/// 파일명 형식: `<log_dir>/pizza-server.log.YYYY-MM-DD`
///
/// 반환되는 `WorkerGuard`는 main에서 유지해야 합니다. drop되면 버퍼링된 로그가 flush되지 않습니다.
pub fn init_logging(log_dir: impl AsRef<Path>) -> WorkerGuard {
    let file_appender = rolling::daily(log_dir.as_ref(), LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let stdout_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true)
        .flatten_event(false);

    let file_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true)
        .flatten_event(false)
        .with_ansi(false)
        .with_writer(non_blocking);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
    {
        // seed 바이너리와 서버가 같은 초기화를 공유하므로 중복 초기화는 무시한다
        eprintln!("tracing already initialized or failed to initialize: {}", err);
    }

    guard
}
