//! # 텍스트 해석기
//!
//! 질문 원문에서 도시 별칭과 상대 날짜를 뽑아냅니다.
//! 형태소 분석 없이 **부분 문자열 포함 여부**만 봅니다.
//!
//! - `extract_city()`: 공백을 모두 지운 뒤 도시 테이블 순서대로 별칭을 찾음
//! - `extract_relative_day()`: "모레" → "내일" 순서로 찾음
//!
//! 부분 문자열 검사이므로 별칭이 다른 단어 안에 들어 있으면 오탐이 생길 수 있습니다.
//! (예: "고양이"는 "고양"으로 해석됩니다.)

use crate::models::RelativeDay;

use super::city::{CITY_TABLE, DEFAULT_CITY};

/// 질문에서 도시 별칭을 찾습니다.
///
/// "부 산"처럼 띄어 쓴 경우도 찾을 수 있도록 공백을 먼저 제거합니다.
/// 아무것도 찾지 못하면 기본 도시("서울")를 반환합니다.
pub fn extract_city(text: &str) -> &'static str {
    // .chars().filter(...).collect(): 공백 문자(스페이스, 탭, 줄바꿈)를 제외한 새 문자열
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    CITY_TABLE
        .iter()
        .find(|entry| compact.contains(entry.alias))
        .map_or(DEFAULT_CITY, |entry| entry.alias)
}

/// 질문에서 상대 날짜를 찾습니다.
///
/// 더 구체적인 "모레"를 먼저 검사합니다.
pub fn extract_relative_day(text: &str) -> RelativeDay {
    if text.contains("모레") {
        RelativeDay::AfterTomorrow
    } else if text.contains("내일") {
        RelativeDay::Tomorrow
    } else {
        RelativeDay::Current
    }
}

/// 도시와 상대 날짜를 한 번에 추출합니다.
pub fn extract_location_and_time(text: &str) -> (&'static str, RelativeDay) {
    (extract_city(text), extract_relative_day(text))
}
