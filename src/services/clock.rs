//! # 한국 시간 유틸리티
//!
//! 서버 호스트의 시간대와 상관없이 모든 날짜 계산과 타임스탬프는
//! Asia/Seoul(UTC+9) 기준입니다.

use chrono::{DateTime, Utc};
use chrono_tz::{Asia::Seoul, Tz};

/// 현재 시각 (Asia/Seoul)
pub fn seoul_now() -> DateTime<Tz> {
    Utc::now().with_timezone(&Seoul)
}

/// 응답 봉투에 넣을 ISO-8601 타임스탬프 (예: "2026-10-16T14:03:12.123456+09:00")
pub fn seoul_timestamp() -> String {
    seoul_now().to_rfc3339()
}
