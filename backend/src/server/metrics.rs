//! Prometheus middleware serving `/metrics`.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use prometheus::Registry;

const NAMESPACE: &str = "user_directory";

/// Build request metrics backed by a dedicated registry.
///
/// # Errors
/// Returns [`std::io::Error`] when the collectors cannot be registered.
pub(crate) fn build_metrics() -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new(NAMESPACE)
        .registry(Registry::new())
        .endpoint("/metrics")
        .build()
        .map_err(|err| {
            std::io::Error::other(format!("failed to configure Prometheus metrics: {err}"))
        })
}
