//! Prometheus metrics for observability and monitoring.
//!
//! Every [`Store`](crate::Store) records:
//! - `store_actions_total` (counter, labels `store`, `action`)
//! - `store_reducer_duration_seconds` (histogram, label `store`)
//! - `store_notifications_total` (counter, label `store`)
//! - `store_subscribers` (gauge, label `store`)
//!
//! Without an installed recorder these calls are no-ops. Install one with
//! [`MetricsRecorder::install`] and render the text exposition format on demand.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowstate_runtime::metrics::MetricsRecorder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut recorder = MetricsRecorder::new();
//! recorder.install()?;
//!
//! // ... dispatch actions ...
//!
//! if let Some(text) = recorder.render() {
//!     println!("{text}");
//! }
//! # Ok(())
//! # }
//! ```

use metrics::{describe_counter, describe_gauge, describe_histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use thiserror::Error;

// Re-export metrics macros for use in other modules
pub use metrics::{counter, gauge, histogram};

/// Errors from metrics operations.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to build metrics exporter
    #[error("Failed to build metrics exporter: {0}")]
    Build(String),
    /// Failed to install metrics exporter
    #[error("Failed to install metrics exporter: {0}")]
    Install(String),
}

/// Prometheus recorder for store metrics.
///
/// Holds the exporter handle once installed. Rendering is pull-based; no
/// HTTP listener is started.
#[derive(Default)]
pub struct MetricsRecorder {
    handle: Option<PrometheusHandle>,
}

impl MetricsRecorder {
    /// Create a recorder that has not been installed yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { handle: None }
    }

    /// Describe all store metrics and install the Prometheus recorder globally.
    ///
    /// # Errors
    ///
    /// Returns error if the exporter cannot be built or installed.
    ///
    /// # Note
    ///
    /// Only one global recorder can exist per process. If one is already
    /// installed (e.g., by another test), this logs a warning and leaves the
    /// recorder without a handle instead of failing.
    pub fn install(&mut self) -> Result<(), MetricsError> {
        // Register all metric descriptions
        register_metrics();

        let builder = PrometheusBuilder::new()
            // Reducers are pure and in-memory, so buckets start well below a millisecond
            .set_buckets_for_metric(
                Matcher::Suffix("duration_seconds".to_string()),
                &[
                    0.000_001, 0.000_005, 0.000_01, 0.000_05, 0.000_1, 0.000_5, 0.001, 0.005,
                    0.01, 0.1,
                ],
            )
            .map_err(|e| MetricsError::Build(e.to_string()))?;

        match builder.install_recorder() {
            Ok(handle) => {
                self.handle = Some(handle);
                tracing::info!("Metrics recorder installed");
                Ok(())
            }
            Err(e) => {
                let err_msg = e.to_string();
                if err_msg.contains("already initialized") {
                    tracing::warn!("Metrics recorder already initialized, skipping re-initialization");
                    Ok(())
                } else {
                    Err(MetricsError::Install(err_msg))
                }
            }
        }
    }

    /// Get the metrics handle for rendering.
    #[must_use]
    pub const fn handle(&self) -> Option<&PrometheusHandle> {
        self.handle.as_ref()
    }

    /// Render current metrics in Prometheus format.
    ///
    /// Returns `None` if the recorder hasn't been installed.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        self.handle.as_ref().map(PrometheusHandle::render)
    }
}

/// Register all metric descriptions.
fn register_metrics() {
    describe_counter!(
        "store_actions_total",
        "Total number of actions dispatched to a store"
    );
    describe_histogram!(
        "store_reducer_duration_seconds",
        "Time taken by the reducer for one action"
    );
    describe_counter!(
        "store_notifications_total",
        "Total number of subscriber notifications delivered"
    );
    describe_gauge!(
        "store_subscribers",
        "Number of subscribers currently registered"
    );
}
