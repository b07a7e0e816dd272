use chrono::NaiveDateTime;
use serde::Serialize;

use crate::state::BuildInfo;

pub const STATUS_UP: &str = "UP";

/// Body of `GET /api/health`.
///
/// Built fresh per request and dropped once serialized. Field order here is the
/// key order on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: NaiveDateTime,
    pub version: &'static str,
    pub framework_version: &'static str,
    pub runtime_version: &'static str,
}

impl HealthStatus {
    pub fn up(build: BuildInfo, timestamp: NaiveDateTime) -> Self {
        Self {
            status: STATUS_UP,
            timestamp,
            version: build.version,
            framework_version: build.framework_version,
            runtime_version: build.runtime_version,
        }
    }
}
