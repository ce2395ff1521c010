//! Factory for switch/server association rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an association between a switch and a server.
///
/// # Arguments
/// - `db` - Database connection
/// - `switch_id` - Switch side of the association
/// - `server_id` - Server side of the association
///
/// # Returns
/// - `Ok(entity::switch_to_server::Model)` - Created association row
/// - `Err(DbErr)` - Database error during insert (missing switch or server)
pub async fn create_switch_to_server(
    db: &DatabaseConnection,
    switch_id: i32,
    server_id: i32,
) -> Result<entity::switch_to_server::Model, DbErr> {
    entity::switch_to_server::ActiveModel {
        switch_id: ActiveValue::Set(switch_id),
        server_id: ActiveValue::Set(server_id),
    }
    .insert(db)
    .await
}
