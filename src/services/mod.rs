//! # 서비스 모듈
//!
//! 날씨 질문 처리의 비즈니스 로직을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `city`: 한국어 도시 별칭 → 날씨 API 도시 이름 매핑
//! - `interpreter`: 질문에서 도시와 상대 날짜 추출
//! - `provider`: 외부 날씨 API 클라이언트
//! - `selector`: 예보 목록에서 대표 항목 선택
//! - `formatter`: 관측값 → 한국어 답변 변환
//! - `clock`: Asia/Seoul 기준 현재 시각

pub mod city;
pub mod clock;
pub mod formatter;
pub mod interpreter;
pub mod provider;
pub mod selector;

pub use provider::WeatherClient;
