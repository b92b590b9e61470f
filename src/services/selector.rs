//! # 예보 선택기
//!
//! 예보 API는 3시간 간격의 관측값 목록을 돌려줍니다.
//! 이 모듈은 그 목록에서 "내일" 또는 "모레"를 대표할 항목 하나를 고릅니다.
//!
//! ## 알고리즘
//! 1. 한국 시간으로 오늘 날짜에 1일(내일) 또는 2일(모레)을 더해 목표 날짜를 구합니다.
//! 2. 목록 순서대로 훑으며 한국 시간 기준 날짜가 목표 날짜이고
//!    시(hour)가 12 이상인 첫 항목을 고릅니다. (정오 이후 값을 선호)
//! 3. 그런 항목이 없으면 날짜와 상관없이 첫 항목을 돌려줍니다.

use chrono::{DateTime, Days, TimeZone, Timelike};
use chrono_tz::Tz;
use serde_json::Value;

use crate::error::AppError;

/// 목표 날짜의 항목으로 인정하는 최소 시각 (정오)
const MIDDAY_HOUR: u32 = 12;

/// 예보 목록에서 오늘로부터 `days_ahead`일 뒤를 대표하는 항목을 고릅니다.
///
/// 현재 날씨는 예보 목록을 쓰지 않으므로 이 함수를 거치지 않습니다.
///
/// # 매개변수
/// - `list`: 예보 API 응답의 `list` 배열
/// - `days_ahead`: 내일은 1, 모레는 2 (`RelativeDay::days_ahead()`)
/// - `now`: 기준 시각. 테스트에서 고정된 시각을 넣을 수 있도록 밖에서 받습니다.
///
/// # 에러
/// 목록이 비어 있거나 훑은 항목에 정수 `dt`가 없으면 `AppError::Internal`
pub fn select_forecast(
    list: &[Value],
    days_ahead: u64,
    now: DateTime<Tz>,
) -> Result<Value, AppError> {
    let first = list
        .first()
        .ok_or_else(|| AppError::internal("예보 목록이 비어 있습니다"))?;

    let tz = now.timezone();
    let target_date = now
        .date_naive()
        .checked_add_days(Days::new(days_ahead))
        .ok_or_else(|| AppError::internal("날짜 계산 범위를 벗어났습니다"))?;

    for item in list {
        let dt = item
            .get("dt")
            .and_then(Value::as_i64)
            .ok_or_else(|| AppError::internal("예보 항목에 'dt'가 없습니다"))?;

        // timestamp_opt(): Unix 초를 해당 시간대의 시각으로 변환
        // .single(): 모호하지 않은 하나의 시각일 때만 Some
        let Some(forecast_time) = tz.timestamp_opt(dt, 0).single() else {
            continue;
        };

        if forecast_time.date_naive() == target_date && forecast_time.hour() >= MIDDAY_HOUR {
            return Ok(item.clone());
        }
    }

    tracing::debug!("No midday forecast for {}, falling back to first entry", target_date);
    Ok(first.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Asia::Seoul;
    use serde_json::json;

    /// 2026-10-16 09:00 KST
    fn fixed_now() -> DateTime<Tz> {
        Seoul.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap()
    }

    fn item_at(day: u32, hour: u32, temp: f64) -> Value {
        let dt = Seoul
            .with_ymd_and_hms(2026, 10, day, hour, 0, 0)
            .unwrap()
            .timestamp();
        json!({ "dt": dt, "main": { "temp": temp, "humidity": 50 } })
    }

    #[test]
    fn picks_tomorrow_afternoon() {
        let list = vec![
            item_at(16, 12, 1.0),
            item_at(17, 9, 2.0),
            item_at(17, 15, 3.0),
            item_at(17, 18, 4.0),
        ];
        let picked = select_forecast(&list, 1, fixed_now()).unwrap();
        assert_eq!(picked, list[2]);
    }

    #[test]
    fn picks_day_after_tomorrow_at_noon() {
        let list = vec![
            item_at(17, 15, 1.0),
            item_at(18, 6, 2.0),
            item_at(18, 12, 3.0),
        ];
        let picked = select_forecast(&list, 2, fixed_now()).unwrap();
        assert_eq!(picked, list[2]);
    }

    #[test]
    fn falls_back_to_first_entry() {
        let list = vec![item_at(20, 3, 1.0), item_at(21, 15, 2.0)];
        let picked = select_forecast(&list, 1, fixed_now()).unwrap();
        assert_eq!(picked, list[0]);
    }

    #[test]
    fn morning_only_target_day_falls_back() {
        let list = vec![item_at(16, 21, 1.0), item_at(17, 0, 2.0), item_at(17, 9, 3.0)];
        let picked = select_forecast(&list, 1, fixed_now()).unwrap();
        assert_eq!(picked, list[0]);
    }

    #[test]
    fn empty_list_is_internal_error() {
        let err = select_forecast(&[], 1, fixed_now()).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn missing_dt_is_internal_error() {
        let list = vec![json!({ "main": { "temp": 1.0, "humidity": 1 } })];
        let err = select_forecast(&list, 1, fixed_now()).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn date_boundary_uses_seoul_calendar() {
        // 2026-10-17 00:30 KST는 UTC로는 10-16 15:30입니다.
        // 한국 날짜 기준으로는 내일이지만 정오 이전이므로 선택되지 않습니다.
        let list = vec![item_at(16, 15, 1.0), item_at(17, 0, 2.0), item_at(17, 12, 3.0)];
        let picked = select_forecast(&list, 1, fixed_now()).unwrap();
        assert_eq!(picked, list[2]);
    }
}
