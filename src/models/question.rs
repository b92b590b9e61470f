//! # 질문/응답 모델 정의
//!
//! `POST /api/ask`의 요청 본문과 응답 봉투(envelope)를 정의합니다.
//!
//! 응답은 성공이든 실패든 항상 같은 모양입니다:
//! `{ "question": ..., "answer": ..., "timestamp": ... }`

use serde::{Deserialize, Serialize};

use super::weather::WeatherAnswer;

/// 사과 답변에 쓰이는 아이콘 코드
pub const UNKNOWN_ICON: &str = "unknown";

/// 질문 요청 — `POST /api/ask`의 요청 본문
#[derive(Debug, Deserialize)]
pub struct Question {
    /// 사용자가 입력한 원문 (예: "내일 부산 날씨 어때?")
    pub text: String,
}

/// 사과 답변 — 날씨 정보를 가져오지 못했을 때의 답변
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apology {
    pub text: String,
    pub icon: String,
}

impl Apology {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: UNKNOWN_ICON.to_string(),
        }
    }
}

/// 응답 봉투의 `answer` 필드
///
/// `#[serde(untagged)]`: variant 이름 없이 내부 객체만 그대로 JSON으로 내보냅니다.
/// 역직렬화 시에는 위에서부터 차례로 시도하므로,
/// 필드가 더 많은 `Weather`가 먼저 와야 합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Weather(WeatherAnswer),
    Apology(Apology),
}

/// 응답 봉투 — 모든 요청에 대해 HTTP 200과 함께 반환됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherResponse {
    /// 요청에 담겨 온 질문 원문
    pub question: String,
    /// 날씨 답변 또는 사과 답변
    pub answer: Answer,
    /// 응답 생성 시각 (Asia/Seoul, RFC 3339)
    pub timestamp: String,
}
