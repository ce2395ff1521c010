//! SeaORM entity models for the inventory schema.
//!
//! Each module mirrors one table created by the `migration` crate. The `prelude`
//! re-exports the entity types under their table names for concise queries.

pub mod datacenter;
pub mod prelude;
pub mod server;
pub mod switch;
pub mod switch_to_server;
