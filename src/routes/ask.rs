//! # 날씨 질문 라우트 핸들러
//!
//! ## 엔드포인트
//! - `POST /api/ask` → `{ "question": ..., "answer": ..., "timestamp": ... }`
//!
//! 도메인 수준의 실패는 HTTP 상태 코드로 드러내지 않습니다.
//! 성공, 알려진 실패, 알 수 없는 실패 모두 HTTP 200과 같은 봉투(envelope)로 응답하고,
//! 실패 내용은 `answer` 안의 사과 문장으로 전달합니다.
//!
//! ## 처리 흐름
//! 텍스트 해석기 → (도시 테이블) → 날씨 API → 예보 선택기 → 포맷터

use axum::{extract::State, Json};
use tokio::task::JoinError;

use crate::{
    error::AppError,
    models::*,
    services::{clock, formatter, interpreter, WeatherClient},
};

/// 알 수 없는 실패에 대한 고정 사과 문장
pub const GENERIC_APOLOGY: &str = "죄송합니다. 날씨 정보를 처리하는 중에 오류가 발생했습니다.";

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 읽기 전용이므로 요청 사이에 공유해도 안전합니다.
#[derive(Clone)]
pub struct AppState {
    /// 날씨 API 클라이언트
    pub weather: WeatherClient,
}

/// `POST /ask` — 자연어 날씨 질문에 답합니다.
///
/// 실제 처리는 별도의 tokio 태스크에서 실행합니다.
/// 태스크가 비정상 종료(panic)하면 `JoinError`로 돌아오고,
/// 이를 "알 수 없는 실패"로 보고 고정 사과 문장을 답합니다.
pub async fn ask_weather(
    State(state): State<AppState>,
    Json(question): Json<Question>,
) -> Json<WeatherResponse> {
    let text = question.text.clone();
    let task = tokio::spawn(async move { answer_question(&state.weather, &text).await });

    Json(WeatherResponse {
        question: question.text,
        answer: answer_from_task(task.await),
        timestamp: clock::seoul_timestamp(),
    })
}

/// 태스크 결과를 봉투의 `answer`로 바꿉니다.
///
/// - 성공 → 날씨 답변
/// - `AppError` → "죄송합니다. " + 상세 내용
/// - `JoinError`(panic, 취소) → 고정 사과 문장
fn answer_from_task(result: Result<Result<WeatherAnswer, AppError>, JoinError>) -> Answer {
    match result {
        Ok(Ok(answer)) => Answer::Weather(answer),
        Ok(Err(err)) => {
            tracing::warn!(status = err.status(), "Weather question failed: {}", err);
            Answer::Apology(Apology::new(err.apology()))
        }
        Err(join_err) => {
            tracing::error!("Weather task aborted unexpectedly: {}", join_err);
            Answer::Apology(Apology::new(GENERIC_APOLOGY))
        }
    }
}

/// 질문 하나를 답변으로 바꿉니다.
///
/// 포맷 오류는 포맷터 안에서 대체 답변으로 흡수되므로,
/// 여기서 전파되는 에러는 날씨 API 호출 단계의 에러뿐입니다.
async fn answer_question(client: &WeatherClient, text: &str) -> Result<WeatherAnswer, AppError> {
    let (city, day) = interpreter::extract_location_and_time(text);
    tracing::debug!(city, ?day, "Interpreted question");

    let data = client.fetch(city, day).await?;
    Ok(formatter::format_weather(&data, day, city).into_answer())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn panicked_task_answers_with_generic_apology() {
        let result = tokio::spawn(async {
            if true {
                panic!("formatter blew up");
            }
            Ok::<WeatherAnswer, AppError>(formatter::fallback_answer())
        })
        .await;
        assert!(result.is_err());

        let Answer::Apology(apology) = answer_from_task(result) else {
            panic!("expected apology");
        };
        assert_eq!(apology.text, GENERIC_APOLOGY);
        assert_eq!(apology.icon, UNKNOWN_ICON);
    }

    #[tokio::test]
    async fn known_failure_answers_with_detail() {
        let result = tokio::spawn(async {
            Err::<WeatherAnswer, _>(AppError::provider(Some("city not found".to_string()), 404))
        })
        .await;

        let Answer::Apology(apology) = answer_from_task(result) else {
            panic!("expected apology");
        };
        assert_eq!(apology.text, "죄송합니다. city not found");
        assert_eq!(apology.icon, UNKNOWN_ICON);
    }

    #[tokio::test]
    async fn success_answers_with_weather() {
        let answer = formatter::fallback_answer();
        let expected = answer.clone();
        let result = tokio::spawn(async move { Ok::<_, AppError>(answer) }).await;

        assert_eq!(answer_from_task(result), Answer::Weather(expected));
    }
}
