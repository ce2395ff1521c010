//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories are generic over `ConnectionTrait`, so the same
//! code runs against the pool for reads and against a `DatabaseTransaction` for writes.
//! They use SeaORM entity models internally and never build SQL from user-supplied text;
//! every value reaches the store as a bound parameter.

pub mod datacenter;
pub mod server;
pub mod switch;
pub mod transaction;

#[cfg(test)]
mod test;
