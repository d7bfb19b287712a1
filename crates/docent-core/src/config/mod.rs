//! Analytics configuration.

pub mod defaults;

mod analytics_config;

pub use analytics_config::AnalyticsConfig;
