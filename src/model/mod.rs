//! Wire types shared by the HTTP surface and its clients.
//!
//! DTOs here are what the API serializes; the server converts its domain models
//! into them at the controller boundary.

pub mod api;
pub mod datacenter;
pub mod server;
