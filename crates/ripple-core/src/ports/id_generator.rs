//! IdGenerator port - ID 生成の抽象化

use ulid::Ulid;

use crate::domain::PostId;
use crate::ports::Clock;

pub trait IdGenerator: Send + Sync {
    fn post_id(&self) -> PostId;
}

/// ULID-based generator. Uses the injected clock for the timestamp half, so
/// a `FixedClock` makes generated ids deterministic in their time component.
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn post_id(&self) -> PostId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        PostId::from_ulid(Ulid::from_parts(timestamp_ms, rand::random()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FixedClock, SystemClock};
    use chrono::{TimeZone, Utc};

    #[test]
    fn generates_unique_ids() {
        let ids = UlidGenerator::new(SystemClock);

        let id1 = ids.post_id();
        let id2 = ids.post_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn fixed_clock_pins_the_timestamp_part() {
        let fixed_time = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let ids = UlidGenerator::new(FixedClock::new(fixed_time));

        let id1 = ids.post_id();
        let id2 = ids.post_id();

        // ランダム部分があるので ID は異なる
        assert_ne!(id1, id2);

        // ただし、timestamp 部分は同じはず
        assert_eq!(id1.as_ulid().timestamp_ms(), id2.as_ulid().timestamp_ms());
        assert_eq!(
            id1.as_ulid().timestamp_ms(),
            fixed_time.timestamp_millis() as u64
        );
    }
}
