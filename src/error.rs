//! # 에러 처리 모듈
//!
//! 날씨 질문을 처리하면서 발생할 수 있는 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 날씨 제공자 오류와 내부 오류를 하나의 타입으로 통합
//! - `apology()`: 에러를 사용자에게 보여줄 사과 문장으로 변환
//!
//! 응답 변환(포맷팅) 중의 오류는 여기 없습니다.
//! 포맷터가 직접 대체 응답으로 흡수하기 때문입니다 (`services::formatter` 참고).

use thiserror::Error;

/// 날씨 제공자가 메시지를 주지 않았을 때 사용하는 기본 문구
pub const DEFAULT_PROVIDER_MESSAGE: &str = "날씨 정보를 가져오는데 실패했습니다.";

/// 요청 처리 중 발생할 수 있는 에러 종류
///
/// 두 variant 모두 요청 핸들러까지 전파된 뒤,
/// HTTP 200 응답 안의 사과 문장으로 변환됩니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 날씨 제공자가 2xx가 아닌 상태 코드로 응답한 경우
    /// `message`는 제공자가 돌려준 메시지(또는 기본 문구), `status`는 그 상태 코드입니다.
    #[error("{message}")]
    Provider { message: String, status: u16 },

    /// 네트워크 실패, 시간 초과, 응답 해석 실패 등 그 밖의 모든 오류 (HTTP 500 의미)
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// 제공자 오류를 만듭니다.
    /// 메시지가 없으면 기본 문구를 사용합니다.
    pub fn provider(message: Option<String>, status: u16) -> Self {
        AppError::Provider {
            message: message.unwrap_or_else(|| DEFAULT_PROVIDER_MESSAGE.to_string()),
            status,
        }
    }

    /// 원인(cause)을 한국어 안내 문구로 감싼 내부 오류를 만듭니다.
    ///
    /// `impl std::fmt::Display`: 문자열로 출력할 수 있는 모든 타입을 받습니다.
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        AppError::Internal(format!(
            "날씨 정보를 가져오는 중 오류가 발생했습니다: {}",
            cause
        ))
    }

    /// 이 에러가 의미하는 HTTP 상태 코드
    ///
    /// 클라이언트 응답은 항상 200이지만, 로그에는 이 값을 남깁니다.
    pub fn status(&self) -> u16 {
        match self {
            AppError::Provider { status, .. } => *status,
            AppError::Internal(_) => 500,
        }
    }

    /// 사용자에게 보여줄 사과 문장 ("죄송합니다. " + 상세 내용)
    pub fn apology(&self) -> String {
        format!("죄송합니다. {}", self)
    }
}

// reqwest 에러(연결 실패, 시간 초과, JSON 해석 실패)에 `?`를 쓰면
// 자동으로 AppError::Internal로 변환됩니다.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            tracing::warn!("Weather provider request timed out: {}", err);
        }
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_without_message_uses_default() {
        let err = AppError::provider(None, 502);
        assert_eq!(err.to_string(), DEFAULT_PROVIDER_MESSAGE);
        assert_eq!(err.status(), 502);
    }

    #[test]
    fn provider_error_keeps_provider_message() {
        let err = AppError::provider(Some("city not found".to_string()), 404);
        assert_eq!(err.apology(), "죄송합니다. city not found");
        assert_eq!(err.status(), 404);
    }

    #[test]
    fn internal_error_wraps_cause() {
        let err = AppError::internal("connection refused");
        assert_eq!(err.status(), 500);
        assert_eq!(
            err.apology(),
            "죄송합니다. 날씨 정보를 가져오는 중 오류가 발생했습니다: connection refused"
        );
    }
}
