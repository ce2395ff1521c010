//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a datacenter and a server hosted in it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((datacenter, server))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_server_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::datacenter::Model, entity::server::Model), DbErr> {
    let datacenter = crate::factory::datacenter::create_datacenter(db).await?;
    let server = crate::factory::server::create_server(db, datacenter.id).await?;

    Ok((datacenter, server))
}

/// Creates a switch and wires the given server to it.
///
/// # Arguments
/// - `db` - Database connection
/// - `server_id` - Server to attach to the new switch
///
/// # Returns
/// - `Ok((switch, association))` - The switch and its association row
/// - `Err(DbErr)` - Database error during creation
pub async fn create_switch_for_server(
    db: &DatabaseConnection,
    server_id: i32,
) -> Result<(entity::switch::Model, entity::switch_to_server::Model), DbErr> {
    let switch = crate::factory::switch::create_switch(db).await?;
    let association =
        crate::factory::switch_to_server::create_switch_to_server(db, switch.id, server_id)
            .await?;

    Ok((switch, association))
}
