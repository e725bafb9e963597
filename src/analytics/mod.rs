//! Analytics Module
//!
//! The analytical operations the backend exposes and the warehouse seam
//! they compute through. Each operation consults the injected result
//! cache before reaching the warehouse.

mod service;
mod warehouse;

// Re-export public types
pub use service::AnalyticsService;
pub use warehouse::{DemoWarehouse, Warehouse};
