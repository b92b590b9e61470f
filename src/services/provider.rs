//! # 날씨 API 클라이언트
//!
//! 외부 날씨 API(OpenWeatherMap 2.5)를 호출합니다.
//! 요청 하나당 정확히 한 번의 외부 호출만 합니다.
//!
//! ## 엔드포인트
//! | 상대 날짜 | 경로 | 설명 |
//! |-----------|------|------|
//! | 현재 | `{base}/weather` | 현재 날씨 |
//! | 내일, 모레 | `{base}/forecast` | 5일간 3시간 간격 예보 |
//!
//! ## 에러 처리
//! - 2xx가 아닌 응답: `AppError::Provider` (제공자 메시지 + 상태 코드)
//! - 연결 실패, 시간 초과, 응답 해석 실패: `AppError::Internal`

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    error::AppError,
    models::{ForecastResponse, ProviderErrorBody, RelativeDay},
};

use super::{city, clock, selector};

/// 날씨 설명 언어 (한국어)
const LANG: &str = "kr";
/// 단위계 (섭씨)
const UNITS: &str = "metric";

/// 날씨 API 클라이언트
///
/// `reqwest::Client`는 내부적으로 Arc를 사용하므로 clone해도
/// 연결 풀이 복제되지 않고 공유됩니다.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    /// 제한 시간이 걸린 HTTP 클라이언트를 만듭니다.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// 도시와 상대 날짜에 맞는 관측값 하나를 가져옵니다.
    ///
    /// - 현재: `/weather` 응답 전체를 그대로 반환
    /// - 내일/모레: `/forecast` 목록에서 선택기가 고른 항목을 반환
    pub async fn fetch(&self, alias: &str, day: RelativeDay) -> Result<Value, AppError> {
        let query = city::provider_query(alias);
        tracing::debug!(city = alias, query = %query, ?day, "Fetching weather");

        match day.days_ahead() {
            None => self.get_json("weather", &query).await,
            Some(days) => {
                let forecast: ForecastResponse = self.get_json("forecast", &query).await?;
                selector::select_forecast(&forecast.list, days, clock::seoul_now())
            }
        }
    }

    /// `GET {base}/{endpoint}`를 호출하고 성공 응답을 `T`로 해석합니다.
    ///
    /// `T: DeserializeOwned`: 응답 본문을 소유한 채로 만들 수 있는 모든 타입
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, query: &str) -> Result<T, AppError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", query),
                ("appid", self.api_key.as_str()),
                ("lang", LANG),
                ("units", UNITS),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // 에러 본문이 JSON이 아니어도 기본 문구로 제공자 오류를 만듭니다.
            let body = response.json::<ProviderErrorBody>().await.ok();
            let err = AppError::provider(body.and_then(|b| b.message), status.as_u16());
            tracing::warn!(status = status.as_u16(), "Weather provider rejected request: {}", err);
            return Err(err);
        }

        Ok(response.json::<T>().await?)
    }
}
