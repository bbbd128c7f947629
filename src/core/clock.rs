//! 현재 시각 공급자
//!
//! 삭제 유예 기간과 `updatedAt` 갱신은 모두 "지금" 시각에 의존합니다.
//! 서비스는 시계를 직접 호출하지 않고 [`Clock`] 트레이트를 주입받으므로,
//! 테스트에서는 [`ManualClock`]으로 1분 경과를 즉시 재현할 수 있습니다.

use std::sync::RwLock;
use chrono::{DateTime, Duration, Utc};

/// 현재 UTC 시각을 제공하는 트레이트
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 운영 환경용 시스템 시계
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 수동으로 조작하는 시계
///
/// ```rust,ignore
/// let clock = ManualClock::new(Utc::now());
/// clock.advance(Duration::seconds(61));
/// ```
#[derive(Debug)]
pub struct ManualClock {
    now: RwLock<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { now: RwLock::new(start) }
    }

    /// 시계를 주어진 시각으로 맞춥니다.
    pub fn set(&self, at: DateTime<Utc>) {
        let mut now = self.now.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *now = at;
    }

    /// 시계를 주어진 만큼 앞으로 돌립니다.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
