//! # 날씨 모델 정의
//!
//! 날씨 질문 처리에 쓰이는 도메인 타입과,
//! 외부 날씨 API(OpenWeatherMap) 응답을 담는 구조체들을 정의합니다.
//!
//! ## 구조체 역할
//! - `RelativeDay`: 질문에서 추출한 상대 날짜 (현재/내일/모레)
//! - `WeatherDataPoint`: 날씨 관측값 하나 (기온, 습도, 설명, 아이콘)
//! - `ForecastResponse`: 예보 API 응답 (시간대별 관측값 목록)
//! - `ProviderErrorBody`: 날씨 API의 에러 응답 본문
//! - `WeatherAnswer`: 클라이언트에게 돌려줄 구조화된 답변

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// 질문에서 추출한 상대 날짜
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeDay {
    /// 현재 날씨
    Current,
    /// 내일
    Tomorrow,
    /// 모레 (내일의 다음 날)
    AfterTomorrow,
}

impl RelativeDay {
    /// 답변 문장에 들어갈 한국어 시간 표현
    pub fn time_phrase(&self) -> &'static str {
        match self {
            RelativeDay::Current => "현재",
            RelativeDay::Tomorrow => "내일",
            RelativeDay::AfterTomorrow => "모레",
        }
    }

    /// 오늘로부터 며칠 뒤인지 반환합니다.
    /// 현재 날씨는 예보 선택이 필요 없으므로 `None`입니다.
    pub fn days_ahead(&self) -> Option<u64> {
        match self {
            RelativeDay::Current => None,
            RelativeDay::Tomorrow => Some(1),
            RelativeDay::AfterTomorrow => Some(2),
        }
    }
}

/// 날씨 관측값 하나
///
/// 현재 날씨 응답과 예보 목록의 각 항목은 모두 이 필드들을 가지고 있습니다.
/// 나머지 필드(바람, 구름 등)는 serde가 무시합니다.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherDataPoint {
    pub main: MainReadings,
    pub weather: Vec<WeatherCondition>,
}

/// 기온과 습도 (`main` 객체)
#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    /// 섭씨 기온 (`units=metric`으로 요청하므로 섭씨)
    pub temp: f64,
    /// 상대 습도 (%). 정수든 실수든 제공자가 보낸 숫자 그대로 전달합니다.
    pub humidity: Number,
}

/// 날씨 상태 (`weather` 배열의 항목)
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    /// 한국어 날씨 설명 (`lang=kr`로 요청하므로 "맑음" 등)
    pub description: String,
    /// 아이콘 코드 (예: "01d")
    pub icon: String,
}

/// 예보 API 응답
///
/// 각 항목은 그대로 `Value`로 보관합니다.
/// 선택기(selector)는 `dt`만 읽고, 선택된 항목의 나머지 해석은 포맷터가 맡습니다.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<Value>,
}

/// 날씨 API가 2xx가 아닌 응답에 담아 보내는 본문
/// 예: `{"cod": "404", "message": "city not found"}`
#[derive(Debug, Deserialize)]
pub struct ProviderErrorBody {
    pub message: Option<String>,
}

/// 클라이언트에게 돌려줄 구조화된 날씨 답변
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAnswer {
    /// 자연어 답변 문장
    pub text: String,
    /// 아이콘 코드
    pub icon: String,
    /// 소수점 첫째 자리까지 반올림한 기온
    pub temp: f64,
    /// 습도 (%)
    pub humidity: Number,
    /// 날씨 설명
    pub description: String,
}
