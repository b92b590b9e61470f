//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `question`: 질문 요청과 응답 봉투
//! - `weather`: 상대 날짜, 날씨 API 응답, 구조화된 답변
//!
//! `pub use X::*;`로 재공개하므로 `crate::models::RelativeDay`처럼 짧게 접근할 수 있습니다.

pub mod question;
pub mod weather;

pub use question::*;
pub use weather::*;
