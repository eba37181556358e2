//! `FleetDesk` Core Library
//!
//! Shared functionality for `FleetDesk` components:
//! - Computer and user record types
//! - In-memory record store with search and status filtering
//! - Request schema validation for create/update payloads
//! - Configuration resolution and hierarchy
//! - Common error types

pub mod config;
pub mod error;
pub mod model;
pub mod schema;
pub mod store;
pub mod tracing_init;

pub use config::Config;
pub use error::{Error, Result};
pub use model::{Computer, NewComputer, NewUser, Stats, Status, UpdateComputer, User};
pub use schema::{ValidationErrors, Violation};
pub use store::RecordStore;
