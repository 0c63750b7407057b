//! Health check handler

/// Liveness probe. Always `ok`; the collector is not consulted.
pub async fn check() -> &'static str {
    "ok"
}
