use serde::Serialize;

/// What the liveness check reports. It does not look at the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
}

/// Reports that the process is up and able to answer requests.
pub fn check_health() -> HealthReport {
    HealthReport { status: "ok" }
}
