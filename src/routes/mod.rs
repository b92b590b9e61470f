//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `ask`: 자연어 날씨 질문
//! - `health`: 서버 상태 확인 (헬스체크)

pub mod ask;
pub mod health;

pub use ask::*;
pub use health::*;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// 전체 라우터를 만듭니다.
///
/// API 라우트는 `/api` 아래에 중첩됩니다.
/// main과 통합 테스트가 같은 라우터를 사용합니다.
pub fn app_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/ask", post(ask_weather))
        .route("/health", get(health_check))
        .with_state(state);

    // 브라우저 프론트엔드가 다른 출처에서 호출하므로 모두 허용합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
