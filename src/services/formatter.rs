//! # 답변 포맷터
//!
//! 날씨 관측값 하나를 한국어 답변 문장과 구조화된 필드로 바꿉니다.
//!
//! 관측값에 필요한 필드가 없거나 모양이 다르면 에러를 전파하지 않고
//! 고정된 대체 답변(`Degraded`)을 돌려줍니다.
//! 호출하는 쪽은 `FormatOutcome`으로 두 경우를 구분할 수 있습니다.

use serde::Deserialize; // `WeatherDataPoint::deserialize()` 트레이트 메서드
use serde_json::{Number, Value};

use crate::models::{question::UNKNOWN_ICON, RelativeDay, WeatherAnswer, WeatherDataPoint};

/// 대체 답변의 문장
pub const FALLBACK_TEXT: &str = "날씨 정보 처리 중 오류가 발생했습니다.";
/// 대체 답변의 날씨 설명
pub const FALLBACK_DESCRIPTION: &str = "알 수 없음";

/// 포맷 결과
#[derive(Debug, Clone, PartialEq)]
pub enum FormatOutcome {
    /// 관측값을 정상적으로 해석함
    Formatted(WeatherAnswer),
    /// 관측값이 잘못되어 대체 답변을 만듦
    Degraded(WeatherAnswer),
}

impl FormatOutcome {
    /// 어느 경우든 클라이언트에게 보낼 답변을 꺼냅니다.
    pub fn into_answer(self) -> WeatherAnswer {
        match self {
            FormatOutcome::Formatted(answer) | FormatOutcome::Degraded(answer) => answer,
        }
    }
}

/// 관측값(JSON)을 답변으로 변환합니다.
///
/// # 매개변수
/// - `data`: 현재 날씨 응답 또는 예보 목록의 한 항목
/// - `day`: 답변 문장에 넣을 상대 날짜
/// - `city`: 한국어 도시 별칭 (예: "부산")
pub fn format_weather(data: &Value, day: RelativeDay, city: &str) -> FormatOutcome {
    // `&Value`는 그 자체로 Deserializer이므로, 복제 없이 빌린 채로 구조체로 해석합니다.
    let point = match WeatherDataPoint::deserialize(data) {
        Ok(point) => point,
        Err(e) => {
            tracing::warn!("Malformed weather data point: {}", e);
            return FormatOutcome::Degraded(fallback_answer());
        }
    };

    // weather 배열이 비어 있으면 설명과 아이콘을 만들 수 없습니다.
    let Some(condition) = point.weather.first() else {
        tracing::warn!("Weather data point has no conditions");
        return FormatOutcome::Degraded(fallback_answer());
    };

    let temp = round_one_decimal(point.main.temp);
    let humidity = point.main.humidity.clone();

    let text = format!(
        "{}의 {} 날씨입니다. 기온은 {:.1}°C이고, 습도는 {}%입니다. 날씨는 {} 상태입니다.",
        city,
        day.time_phrase(),
        temp,
        humidity,
        condition.description
    );

    FormatOutcome::Formatted(WeatherAnswer {
        text,
        icon: condition.icon.clone(),
        temp,
        humidity,
        description: condition.description.clone(),
    })
}

/// 잘못된 관측값에 대한 고정 대체 답변
pub fn fallback_answer() -> WeatherAnswer {
    WeatherAnswer {
        text: FALLBACK_TEXT.to_string(),
        icon: UNKNOWN_ICON.to_string(),
        temp: 0.0,
        humidity: Number::from(0),
        description: FALLBACK_DESCRIPTION.to_string(),
    }
}

/// 소수점 첫째 자리로 반올림합니다.
///
/// `value * 10.0`을 거치면 1.4499…가 정확히 14.5가 되어 한 번 더 반올림되므로,
/// 이진 값 그대로 반올림하는 `{:.1}` 포맷 결과를 다시 숫자로 읽습니다.
fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
