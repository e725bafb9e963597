//! Models Module
//!
//! Request and response DTOs for the HTTP API.

pub mod requests;
pub mod responses;

pub use requests::{OverviewParams, TopProductsParams, TrendsParams};
pub use responses::{ClearResponse, HealthResponse, StatsResponse, WarmResponse};
