use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct SwitchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SwitchRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Removes every switch association of a server, returning how many were removed
    pub async fn detach_server(&self, server_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::SwitchToServer::delete_many()
            .filter(entity::switch_to_server::Column::ServerId.eq(server_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
