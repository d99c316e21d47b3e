use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db?mode=rwc";

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    /// 시작 시 엔티티 정의로부터 누락된 테이블 생성
    pub schema_update: bool,
    /// 가격이 1~30 범위를 벗어나면 검증 실패로 처리
    pub enforce_price_range: bool,
    pub log_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 5555,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            schema_update: true,
            enforce_price_range: false,
            log_dir: "logs".to_string(),
        }
    }
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정을 구성합니다. 테스트에서 프로세스 환경을 건드리지 않기 위해 사용합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.server_port,
        };

        let database_url = lookup("DB_URI")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| {
                tracing::info!(
                    "DB_URI is not set, falling back to {}",
                    DEFAULT_DATABASE_URL
                );
                defaults.database_url
            });

        let schema_update = parse_flag(&lookup, "DB_SCHEMA_UPDATE", defaults.schema_update)?;
        let enforce_price_range =
            parse_flag(&lookup, "ENFORCE_PRICE_RANGE", defaults.enforce_price_range)?;

        let log_dir = lookup("LOG_DIR").unwrap_or(defaults.log_dir);

        Ok(Self {
            server_port,
            database_url,
            schema_update,
            enforce_price_range,
            log_dir,
        })
    }
}

fn parse_flag<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .to_ascii_lowercase()
            .parse()
            .map_err(|_| ConfigError::InvalidFlag { key, value: raw }),
        None => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(String),
    #[error("Invalid boolean for {key}: {value} (use 'true' or 'false')")]
    InvalidFlag { key: &'static str, value: String },
}
