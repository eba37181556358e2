//! `FleetDesk` Server Library
//!
//! REST API over the in-memory computer inventory:
//! - `/api/computers` CRUD, search and status filtering
//! - `/api/computers/stats/overview` status counts
//! - optional static hosting of the dashboard build

pub mod computers;
pub mod error;
pub mod routes;

pub use error::ApiError;
pub use routes::{AppState, build_router, with_middleware};
