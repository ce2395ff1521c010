//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Turning raw JSON payloads into typed parameters before any I/O
//! - **Referential integrity**: Checking referenced rows inside the write transaction
//! - **Transaction management**: Every write runs in one transaction that commits on
//!   success and rolls back on any error
//!
//! Reads run directly on the pool and see only committed data.

pub mod datacenter;
pub mod integrity;
pub mod server;
