//! Search policy types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default wall-clock budget for one search call.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(10);

/// Search budget configuration.
///
/// The budget is checked once per frontier pop, never per edge. A zero budget
/// therefore fails with `Timeout` before the first pop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPolicyV1 {
    /// Wall-clock budget, serialized as whole milliseconds.
    #[serde(rename = "time_budget_ms", with = "duration_ms")]
    pub time_budget: Duration,
}

impl SearchPolicyV1 {
    #[must_use]
    pub fn with_time_budget(time_budget: Duration) -> Self {
        Self { time_budget }
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET,
        }
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
