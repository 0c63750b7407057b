//! Workload status model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, SecondsFormat, Utc};

use super::report::{trust_tier_to_string, AttestationReport};

/// Details used when a failed report carries no error of its own
pub const DEFAULT_FAILURE_DETAILS: &str =
    "TEE attestation failed - not running in genuine confidential environment";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttestationStatus {
    Verified,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateStatus {
    Passing,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Compliant,
    Violation,
}

/// Cached compliance view of one workload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadStatus {
    pub name: String,
    pub namespace: String,
    pub attested: bool,
    pub attestation_status: AttestationStatus,
    /// Report capture time, RFC 3339
    pub timestamp: String,
    pub details: String,
    /// Gate 1: code integrity
    pub gate_one_status: GateStatus,
    /// Gate 2: TEE attestation
    pub gate_two_status: GateStatus,
    pub last_checked: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tee_type: String,
}

/// Response body of `GET /api/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub overall_status: OverallStatus,
    pub workloads: Vec<WorkloadStatus>,
    pub last_updated: DateTime<Utc>,
}

impl WorkloadStatus {
    /// Map a collector report to its cached status.
    ///
    /// Gate 1 is always passing: only pods admitted past signature
    /// verification ever reach the collector, so it is not evaluated here.
    pub fn from_report(report: &AttestationReport, checked_at: DateTime<Utc>) -> Self {
        let (attestation_status, gate_two_status, details) = if report.attested {
            let details = match &report.trust_vector {
                Some(vector) => format!(
                    "TEE attestation successful ({}) - Hardware: {}, Config: {}, Executables: {}",
                    report.tee_type,
                    trust_tier_to_string(vector.hardware),
                    trust_tier_to_string(vector.configuration),
                    trust_tier_to_string(vector.executables),
                ),
                None => format!("TEE attestation successful ({})", report.tee_type),
            };
            (AttestationStatus::Verified, GateStatus::Passing, details)
        } else {
            let details = if report.error.is_empty() {
                DEFAULT_FAILURE_DETAILS.to_string()
            } else {
                report.error.clone()
            };
            (AttestationStatus::Failed, GateStatus::Failed, details)
        };

        Self {
            name: report.pod_name.clone(),
            namespace: report.namespace.clone(),
            attested: report.attested,
            attestation_status,
            timestamp: report.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            details,
            gate_one_status: GateStatus::Passing,
            gate_two_status,
            last_checked: checked_at,
            tee_type: report.tee_type.clone(),
        }
    }

    /// Whether this workload counts against overall compliance
    pub fn is_violation(&self) -> bool {
        !self.attested || self.gate_two_status == GateStatus::Failed
    }
}

impl DashboardResponse {
    /// Aggregate a set of statuses: any violating workload makes the whole
    /// dashboard a violation.
    pub fn from_workloads(workloads: Vec<WorkloadStatus>, generated_at: DateTime<Utc>) -> Self {
        let overall_status = if workloads.iter().any(WorkloadStatus::is_violation) {
            OverallStatus::Violation
        } else {
            OverallStatus::Compliant
        };

        Self {
            overall_status,
            workloads,
            last_updated: generated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrustVector;

    fn attested_report(trust_vector: Option<TrustVector>) -> AttestationReport {
        AttestationReport {
            pod_name: "test-pod".to_string(),
            namespace: "test-ns".to_string(),
            tee_type: "tdx".to_string(),
            attested: true,
            trust_vector,
            ..Default::default()
        }
    }

    fn failed_report(error: &str) -> AttestationReport {
        AttestationReport {
            pod_name: "tampered-pod".to_string(),
            namespace: "test-ns".to_string(),
            tee_type: "tdx".to_string(),
            attested: false,
            error: error.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_attested_with_trust_vector() {
        let vector = TrustVector {
            hardware: 2,
            configuration: 32,
            executables: 96,
            ..Default::default()
        };
        let now = Utc::now();
        let status = WorkloadStatus::from_report(&attested_report(Some(vector)), now);

        assert_eq!(status.name, "test-pod");
        assert_eq!(status.namespace, "test-ns");
        assert!(status.attested);
        assert_eq!(status.attestation_status, AttestationStatus::Verified);
        assert_eq!(status.gate_one_status, GateStatus::Passing);
        assert_eq!(status.gate_two_status, GateStatus::Passing);
        assert_eq!(status.last_checked, now);
        assert_eq!(status.tee_type, "tdx");
        assert_eq!(
            status.details,
            "TEE attestation successful (tdx) - Hardware: Affirming, Config: Warning, Executables: Contraindicated"
        );
    }

    #[test]
    fn test_attested_without_trust_vector() {
        let status = WorkloadStatus::from_report(&attested_report(None), Utc::now());
        assert_eq!(status.attestation_status, AttestationStatus::Verified);
        assert_eq!(status.gate_two_status, GateStatus::Passing);
        assert_eq!(status.details, "TEE attestation successful (tdx)");
    }

    #[test]
    fn test_failed_uses_report_error() {
        let status = WorkloadStatus::from_report(
            &failed_report("CDH unreachable: connection refused"),
            Utc::now(),
        );

        assert!(!status.attested);
        assert_eq!(status.attestation_status, AttestationStatus::Failed);
        assert_eq!(status.gate_one_status, GateStatus::Passing);
        assert_eq!(status.gate_two_status, GateStatus::Failed);
        assert_eq!(status.details, "CDH unreachable: connection refused");
        assert!(status.is_violation());
    }

    #[test]
    fn test_failed_without_error_uses_fallback() {
        let status = WorkloadStatus::from_report(&failed_report(""), Utc::now());
        assert_eq!(status.details, DEFAULT_FAILURE_DETAILS);
    }

    #[test]
    fn test_timestamp_is_rfc3339_seconds() {
        let mut report = attested_report(None);
        report.timestamp = "2026-10-18T09:30:00.123456Z".parse().unwrap();

        let status = WorkloadStatus::from_report(&report, Utc::now());
        assert_eq!(status.timestamp, "2026-10-18T09:30:00Z");
    }

    #[test]
    fn test_serialized_field_names() {
        let status = WorkloadStatus::from_report(&failed_report("boom"), Utc::now());
        let value = serde_json::to_value(&status).unwrap();

        assert_eq!(value["attestation_status"], "failed");
        assert_eq!(value["gate_one_status"], "passing");
        assert_eq!(value["gate_two_status"], "failed");
        assert_eq!(value["tee_type"], "tdx");

        let mut untyped = status;
        untyped.tee_type.clear();
        let value = serde_json::to_value(&untyped).unwrap();
        assert!(value.get("tee_type").is_none());
    }

    #[test]
    fn test_overall_status_aggregation() {
        let now = Utc::now();
        let good = WorkloadStatus::from_report(&attested_report(None), now);
        let bad = WorkloadStatus::from_report(&failed_report(""), now);

        let response = DashboardResponse::from_workloads(vec![good.clone()], now);
        assert_eq!(response.overall_status, OverallStatus::Compliant);

        let response = DashboardResponse::from_workloads(vec![good.clone(), bad], now);
        assert_eq!(response.overall_status, OverallStatus::Violation);
        assert_eq!(response.workloads.len(), 2);

        // attested but gate two somehow failed still counts
        let mut inconsistent = good;
        inconsistent.gate_two_status = GateStatus::Failed;
        let response = DashboardResponse::from_workloads(vec![inconsistent], now);
        assert_eq!(response.overall_status, OverallStatus::Violation);
    }
}
