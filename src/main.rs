//! # 날씨 질문 응답 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩과 공유 상태(날씨 API 클라이언트) 생성
//! 4. API 라우터 설정
//! 5. HTTP 서버 시작

use anyhow::Result; // anyhow::Result: 어떤 에러 타입이든 담을 수 있는 범용 Result 타입
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weather_qa::{app_router, build_state, Config};

// #[tokio::main]: 비동기 런타임을 시작하는 어트리뷰트 매크로
#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG 환경변수가 없으면 이 크레이트와 tower_http, axum을 debug 레벨로 설정
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_qa=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    // 로깅을 먼저 초기화해야 API 키 누락 경고가 출력됩니다.
    let config = Config::from_env();
    tracing::info!(
        "Starting weather Q&A server on {}:{} (provider: {})",
        config.host,
        config.port,
        config.weather_api_base_url
    );

    // ── 4단계: 공유 상태와 라우터 ──
    let state = build_state(&config)?;
    let app = app_router(state);

    // ── 5단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Ctrl+C로 종료할 때까지 요청을 처리합니다.
    axum::serve(listener, app).await?;

    Ok(())
}
