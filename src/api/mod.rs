//! API Module
//!
//! HTTP handlers and routing for the analytics backend REST API.
//!
//! # Endpoints
//! - `GET  /health` - Liveness with cache occupancy
//! - `GET  /api/analytics/overview` - Revenue/expense/profit summary
//! - `GET  /api/analytics/revenue-trends` - Monthly revenue series
//! - `GET  /api/analytics/top-products` - Best sellers
//! - `GET  /api/cache/stats` - Result cache statistics
//! - `POST /api/cache/clear` - Administrative cache reset
//! - `POST /api/cache/warm` - Pre-compute common queries

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
