//! # 한국어 날씨 질문 응답 서비스
//!
//! "내일 부산 날씨 어때?" 같은 자연어 질문에서 도시와 날짜를 뽑아
//! 외부 날씨 API를 조회하고, 한국어 문장으로 답합니다.
//!
//! 바이너리(`main.rs`)와 통합 테스트(`tests/`)가 이 라이브러리를 함께 사용합니다.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use routes::{app_router, AppState};

/// 설정으로부터 공유 상태를 만듭니다.
pub fn build_state(config: &Config) -> Result<AppState, AppError> {
    let weather = services::WeatherClient::new(
        config.weather_api_base_url.as_str(),
        config.api_key.as_str(),
        config.request_timeout,
    )?;
    Ok(AppState { weather })
}
