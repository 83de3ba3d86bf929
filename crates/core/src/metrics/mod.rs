//! Portfolio metrics: summary aggregation and risk concentration checks.

pub mod metrics_model;
pub mod risk_service;
pub mod summary_service;

pub use metrics_model::{display_percent, ClassAllocation, LargestHolding, PortfolioSummary};
pub use risk_service::risk_flags;
pub use summary_service::summarize;
