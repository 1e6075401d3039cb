//! Configuration values consumed by the core. Supplied externally; the core
//! never reads files or the environment itself.

use serde::Deserialize;

use crate::impls::PoolConfig;

pub const DEFAULT_BACKFILL_LIMIT: usize = 50;
pub const DEFAULT_MAX_TIMELINE_LENGTH: usize = 50;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
    /// Bounds of the dispatch worker pool.
    pub pool: PoolConfig,

    /// How many of the followed user's newest posts a fresh follow pulls in.
    pub backfill_limit: usize,

    /// Cap on entries returned by a timeline read.
    pub max_timeline_length: usize,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            pool: PoolConfig::default(),
            backfill_limit: DEFAULT_BACKFILL_LIMIT,
            max_timeline_length: DEFAULT_MAX_TIMELINE_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = RippleConfig::default();
        assert_eq!(config.backfill_limit, 50);
        assert_eq!(config.max_timeline_length, 50);
        assert!(config.pool.core_workers <= config.pool.max_workers);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: RippleConfig = serde_json::from_str(r#"{"backfill_limit": 10}"#).unwrap();
        assert_eq!(config.backfill_limit, 10);
        assert_eq!(config.max_timeline_length, DEFAULT_MAX_TIMELINE_LENGTH);
    }
}
