//! Attestation Collector report model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// EAR trust tier codes
pub const TIER_NONE: i64 = 0;
pub const TIER_AFFIRMING: i64 = 2;
pub const TIER_WARNING: i64 = 32;
pub const TIER_CONTRAINDICATED: i64 = 96;

/// Per-category EAR trust tiers as reported by the collector
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustVector {
    pub instance_identity: i64,
    pub configuration: i64,
    pub executables: i64,
    pub file_system: i64,
    pub hardware: i64,
    pub runtime_opaque: i64,
    pub storage_opaque: i64,
    pub sourced_data: i64,
}

/// One workload's attestation result, as served by `GET /api/v1/reports`.
///
/// Decoding is structural only: absent fields take their zero value and
/// unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AttestationReport {
    pub pod_name: String,
    pub namespace: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tee_type: String,
    pub attested: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_vector: Option<TrustVector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ear_token: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

impl AttestationReport {
    /// Cache key for the workload this report describes
    pub fn key(&self) -> String {
        workload_key(&self.namespace, &self.pod_name)
    }
}

/// Composite `namespace/name` key used by the status cache and the lookup route
pub fn workload_key(namespace: &str, name: &str) -> String {
    format!("{}/{}", namespace, name)
}

/// Human-readable label for an EAR trust tier
pub fn trust_tier_to_string(tier: i64) -> String {
    match tier {
        TIER_NONE => "None".to_string(),
        TIER_AFFIRMING => "Affirming".to_string(),
        TIER_WARNING => "Warning".to_string(),
        TIER_CONTRAINDICATED => "Contraindicated".to_string(),
        other => format!("Unknown({})", other),
    }
}
