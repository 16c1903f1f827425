//! Response shape of `GET /health`.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub link_store: CheckStatus,
}

/// Outcome of probing one component.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok",
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

impl HealthResponse {
    pub fn from_checks(checks: HealthChecks) -> Self {
        Self {
            status: if checks.link_store.is_ok() {
                "healthy"
            } else {
                "degraded"
            },
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_check_degrades() {
        let response = HealthResponse::from_checks(HealthChecks {
            link_store: CheckStatus::error("boom"),
        });

        assert!(!response.is_healthy());
        assert_eq!(response.status, "degraded");
    }
}
