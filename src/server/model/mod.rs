//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are the
//! normalized output of the validation layer.

pub mod datacenter;
pub mod pagination;
pub mod server;
