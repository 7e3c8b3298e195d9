//! Engine configuration.

use std::time::Duration;

use serde::Deserialize;

/// Session constants and UX pacing delays
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Owner attached to every created todo
    pub owner_id: i64,
    /// Pause before an update request is sent
    pub settle_delay_ms: u64,
    /// How long an error notice stays visible
    pub notice_duration_ms: u64,
    /// Delay before the active counter catches up with the list
    pub counter_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            owner_id: 690,
            settle_delay_ms: 500,
            notice_duration_ms: 2000,
            counter_delay_ms: 500,
        }
    }
}

impl EngineConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }

    pub fn counter_delay(&self) -> Duration {
        Duration::from_millis(self.counter_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"ownerId": 12}"#).unwrap();
        assert_eq!(config.owner_id, 12);
        assert_eq!(config.settle_delay(), Duration::from_millis(500));
        assert_eq!(config.notice_duration(), Duration::from_secs(2));
    }
}
