//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows directly through SeaORM active
//! models, bypassing the service's validation so tests can arrange any stored state.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let datacenter = factory::create_datacenter(&db).await?;
//!     let server = factory::create_server(&db, datacenter.id).await?;
//!
//!     // Or create both at once
//!     let (datacenter, server) = factory::helpers::create_server_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let server = factory::server::ServerFactory::new(&db, datacenter.id)
//!     .hostname("db-01.local.lan")
//!     .configuration(serde_json::json!({ "cpu_cores": 8 }))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `datacenter` - Create datacenter entities
//! - `switch` - Create switch entities
//! - `server` - Create server entities
//! - `switch_to_server` - Create switch/server association rows
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod datacenter;
pub mod helpers;
pub mod server;
pub mod switch;
pub mod switch_to_server;

// Re-export commonly used factory functions for concise usage
pub use datacenter::create_datacenter;
pub use server::create_server;
pub use switch::create_switch;
pub use switch_to_server::create_switch_to_server;
