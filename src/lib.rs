pub mod api;
pub mod classifier;
pub mod config;
pub mod errors;
pub mod metrics;
pub mod models;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}
