//! # 도시 테이블
//!
//! 한국어 도시 이름(별칭)을 날씨 API가 이해하는 영어 도시 이름으로 바꾸는
//! 고정된 매핑입니다. 실행 중에 바뀌지 않습니다.
//!
//! 테이블은 배열(slice)이므로 **선언 순서가 곧 탐색 순서**입니다.
//! 텍스트 해석기(`interpreter`)는 이 순서대로 부분 문자열을 검사하고
//! 처음 찾은 별칭을 사용합니다. 예를 들어 "수원"이 "수원시"보다 앞에 있으므로
//! "수원시 날씨"는 항상 "수원"으로 해석됩니다 (둘 다 `Suwon`이라 결과는 같습니다).

/// 한국 도시의 국가 코드
const KOREA: &str = "KR";

/// 도시 테이블의 한 항목
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityEntry {
    /// 한국어 별칭 (예: "서울", "수원시")
    pub alias: &'static str,
    /// 날씨 API용 영어 이름 (예: "Seoul")
    pub provider_name: &'static str,
    /// ISO 국가 코드 (예: "KR")
    pub country: &'static str,
}

/// 별칭을 찾지 못했을 때 사용하는 기본 도시
pub const DEFAULT_CITY: &str = "서울";

/// 도시 테이블
///
/// `static` 슬라이스는 컴파일 시점에 만들어져
/// 모든 요청이 읽기 전용으로 공유합니다. (`entry`가 `const fn`이라 호출할 수 있습니다)
pub static CITY_TABLE: &[CityEntry] = &[
    entry("서울", "Seoul"),
    entry("부산", "Busan"),
    entry("대구", "Daegu"),
    entry("인천", "Incheon"),
    entry("광주", "Gwangju"),
    entry("대전", "Daejeon"),
    entry("울산", "Ulsan"),
    entry("제주", "Jeju"),
    entry("안양", "Anyang"),
    entry("고양", "Goyang"),
    entry("성남", "Seongnam"),
    entry("수원", "Suwon"),
    entry("용인", "Yongin"),
    entry("부천", "Bucheon"),
    entry("안산", "Ansan"),
    entry("고양시", "Goyang"),
    entry("안양시", "Anyang"),
    entry("수원시", "Suwon"),
    CityEntry {
        alias: "하와이",
        provider_name: "Hawaii",
        country: "US",
    },
];

const fn entry(alias: &'static str, provider_name: &'static str) -> CityEntry {
    CityEntry {
        alias,
        provider_name,
        country: KOREA,
    }
}

/// 별칭으로 테이블 항목을 찾습니다.
pub fn find(alias: &str) -> Option<&'static CityEntry> {
    CITY_TABLE.iter().find(|entry| entry.alias == alias)
}

/// 별칭을 날씨 API용 도시 이름으로 바꿉니다.
///
/// 테이블에 없으면 별칭을 그대로 돌려줍니다.
/// `'a` 라이프타임: 반환값은 입력 문자열 또는 정적 테이블을 빌려옵니다.
pub fn lookup<'a>(alias: &'a str) -> &'a str {
    match find(alias) {
        Some(entry) => entry.provider_name,
        None => alias,
    }
}

/// 날씨 API의 `q` 파라미터 값을 만듭니다. (예: "Seoul,KR", "Hawaii,US")
pub fn provider_query(alias: &str) -> String {
    let country = find(alias).map_or(KOREA, |entry| entry.country);
    format!("{},{}", lookup(alias), country)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn aliases_are_unique() {
        let aliases: HashSet<_> = CITY_TABLE.iter().map(|e| e.alias).collect();
        assert_eq!(aliases.len(), CITY_TABLE.len());
    }

    #[test]
    fn lookup_maps_known_alias() {
        assert_eq!(lookup("부산"), "Busan");
        assert_eq!(lookup("수원시"), "Suwon");
    }

    #[test]
    fn lookup_returns_unknown_alias_unchanged() {
        assert_eq!(lookup("춘천"), "춘천");
    }

    #[test]
    fn provider_query_uses_country_code() {
        assert_eq!(provider_query("서울"), "Seoul,KR");
        assert_eq!(provider_query("하와이"), "Hawaii,US");
        assert_eq!(provider_query("춘천"), "춘천,KR");
    }
}
