//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `OPENWEATHER_API_KEY`: 날씨 API 인증키 (비밀값)
//! - `WEATHER_API_BASE_URL`: 날씨 API 기본 주소
//! - `WEATHER_API_TIMEOUT_SECS`: 외부 API 호출 제한 시간(초)
//! - `HOST`: 서버 바인딩 주소
//! - `PORT`: 서버 포트 번호

use std::env;
use std::time::Duration;

/// OpenWeatherMap 2.5 API의 기본 주소
/// 현재 날씨는 `{base}/weather`, 예보는 `{base}/forecast`로 호출합니다.
pub const DEFAULT_WEATHER_API_BASE_URL: &str = "http://api.openweathermap.org/data/2.5";

/// 외부 API 호출 제한 시간 기본값 (초)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후,
/// 애플리케이션 전체에서 공유됩니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// 날씨 API 인증키. 비어 있어도 서버는 시작되며,
    /// 요청 시점에 제공자가 인증 오류를 돌려줍니다.
    pub api_key: String,
    /// 날씨 API 기본 주소 (테스트에서는 가짜 서버 주소로 바꿉니다)
    pub weather_api_base_url: String,
    /// 외부 API 호출 제한 시간
    pub request_timeout: Duration,
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 8000)
    pub port: u16,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 필수 항목이 없으므로 실패하지 않습니다.
    /// 모든 항목에 기본값이 있고, 숫자 파싱에 실패하면 기본값을 사용합니다.
    pub fn from_env() -> Self {
        // API 키가 없다고 시작을 막지는 않습니다. 대신 경고를 남깁니다.
        let api_key = env::var("OPENWEATHER_API_KEY").unwrap_or_else(|_| {
            tracing::warn!("OPENWEATHER_API_KEY is not set; provider calls will be rejected");
            String::new()
        });

        let timeout_secs = env::var("WEATHER_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_key,
            weather_api_base_url: env::var("WEATHER_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_WEATHER_API_BASE_URL.to_string()),
            request_timeout: Duration::from_secs(timeout_secs),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_falls_back_to_defaults() {
        // 다른 테스트와 겹치지 않는 변수만 지웁니다.
        env::remove_var("WEATHER_API_BASE_URL");
        env::remove_var("WEATHER_API_TIMEOUT_SECS");

        let config = Config::from_env();
        assert_eq!(config.weather_api_base_url, DEFAULT_WEATHER_API_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
