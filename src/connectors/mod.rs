//! Connectors for external services
//!
//! This module contains API clients for the services sessionwatch observes
//! (the bus-tracking backend's metrics API).

pub mod metrics;

pub use metrics::MetricsClient;
