//! # 시간 유틸리티
//!
//! 저장소에 기록된 타임스탬프는 두 가지 이상의 모양으로 들어올 수 있습니다.
//! MongoDB 네이티브 `DateTime`으로 저장된 문서가 대부분이지만,
//! 외부에서 적재된 문서는 RFC 3339 문자열이나 `{ seconds, nanoseconds }`
//! 형태의 타임스탬프 객체를 담고 있을 수 있습니다.
//!
//! [`normalize_timestamp`]는 이 모든 모양을 `DateTime<Utc>` 하나로 정규화하는
//! 유일한 진입점이며, 저장된 타임스탬프를 읽는 모든 곳에서 사용됩니다.

use chrono::{DateTime, TimeZone, Utc};
use mongodb::bson::{Bson, DateTime as BsonDateTime, Document};

/// 삭제가 허용되기까지 필요한 최소 경과 시간 (분)
pub const GRACE_PERIOD_MINUTES: f64 = 1.0;

/// 저장된 타임스탬프를 UTC 시각으로 정규화합니다.
///
/// # 지원 형식
///
/// | BSON 값 | 해석 |
/// |---------|------|
/// | `DateTime` | 저장소 네이티브 날짜 |
/// | `Timestamp` | 초 단위 BSON 타임스탬프 |
/// | `String` | RFC 3339 문자열 |
/// | `Int64` / `Int32` | 유닉스 에포크 밀리초 |
/// | `Document` | `seconds`/`_seconds` + 선택적 `nanoseconds`/`_nanoseconds` |
///
/// 그 외의 값은 `None`을 반환합니다.
pub fn normalize_timestamp(raw: &Bson) -> Option<DateTime<Utc>> {
    match raw {
        Bson::DateTime(dt) => from_millis(dt.timestamp_millis()),
        Bson::Timestamp(ts) => Utc.timestamp_opt(i64::from(ts.time), 0).single(),
        Bson::String(text) => DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Bson::Int64(millis) => from_millis(*millis),
        Bson::Int32(millis) => from_millis(i64::from(*millis)),
        Bson::Document(object) => from_timestamp_object(object),
        _ => None,
    }
}

/// `DateTime<Utc>`를 저장소 네이티브 날짜로 변환합니다.
pub fn to_store_timestamp(at: DateTime<Utc>) -> Bson {
    Bson::DateTime(BsonDateTime::from_millis(at.timestamp_millis()))
}

/// 삭제 유예 기간이 지났는지 판단합니다.
///
/// 경과 시간을 분 단위 실수로 계산하여 `1.0` 이상일 때만 `true`입니다.
/// 59.9초는 아직 경과 전이고 정확히 60초는 경과로 봅니다.
/// 생성 시각을 알 수 없으면(`None`) 항상 `false`이므로 삭제할 수 없습니다.
pub fn has_grace_period_elapsed(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    let Some(created_at) = created_at else {
        return false;
    };

    let elapsed_minutes = (now - created_at).num_milliseconds() as f64 / 60_000.0;
    elapsed_minutes >= GRACE_PERIOD_MINUTES
}

fn from_millis(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

fn from_timestamp_object(object: &Document) -> Option<DateTime<Utc>> {
    let seconds = integer_field(object, &["seconds", "_seconds"])?;
    let nanos = integer_field(object, &["nanoseconds", "_nanoseconds"]).unwrap_or(0);

    Utc.timestamp_opt(seconds, u32::try_from(nanos).ok()?).single()
}

fn integer_field(object: &Document, keys: &[&str]) -> Option<i64> {
    keys.iter().find_map(|key| match object.get(*key)? {
        Bson::Int64(value) => Some(*value),
        Bson::Int32(value) => Some(i64::from(*value)),
        Bson::Double(value) => Some(*value as i64),
        _ => None,
    })
}
