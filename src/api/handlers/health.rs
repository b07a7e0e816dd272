/*
 * Responsibility
 * - GET /api/health (liveness probe)
 * - No I/O, no logging; always 200
 */
use axum::{Json, extract::State};

use crate::api::dto::health::HealthStatus;
use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus::up(state.build, state.clock.now()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::sync::Arc;

    use crate::services::Clock;

    struct FixedClock(NaiveDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    #[tokio::test]
    async fn reports_up_with_clock_time() {
        let at = NaiveDate::from_ymd_opt(2026, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        let state = AppState::with_clock(Arc::new(FixedClock(at)));

        let Json(body) = health(State(state.clone())).await;

        assert_eq!(body.status, "UP");
        assert_eq!(body.timestamp, at);
        assert_eq!(body.version, state.build.version);
    }
}
