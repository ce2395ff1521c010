//! Existence checks for referenced rows.
//!
//! Run on the caller's transaction so the check and the write that depends on it
//! see the same snapshot. The database foreign keys remain the final guard.

use sea_orm::ConnectionTrait;

use crate::server::{data::datacenter::DatacenterRepository, error::AppError};

/// Ensures a datacenter with `datacenter_id` exists.
///
/// # Returns
/// - `Ok(())` - The datacenter exists
/// - `Err(AppError::ForeignKeyViolation)` - No such datacenter
/// - `Err(AppError::DbErr)` - The lookup itself failed
pub async fn check_datacenter_exists<C: ConnectionTrait>(
    db: &C,
    datacenter_id: i32,
) -> Result<(), AppError> {
    if DatacenterRepository::new(db).exists(datacenter_id).await? {
        return Ok(());
    }

    tracing::error!("Datacenter with id {} does not exist", datacenter_id);

    Err(AppError::ForeignKeyViolation {
        entity: "Datacenter",
        id: datacenter_id,
    })
}
