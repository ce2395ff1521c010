//! Scoped transaction handling.
//!
//! A write opens a `DatabaseTransaction` with [`begin`] and hands the outcome of
//! its work to [`finish`], which commits on `Ok` and rolls back on `Err`. If the
//! future is dropped before `finish` runs (panic, cancelled request), SeaORM's
//! `Drop` implementation rolls the transaction back and the connection returns
//! to the pool, so partial writes are never observable.

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

/// Acquires a pooled connection and opens a transaction on it.
pub async fn begin(db: &DatabaseConnection) -> Result<DatabaseTransaction, DbErr> {
    db.begin().await
}

/// Commits `txn` if `result` is `Ok`, otherwise rolls it back and returns the
/// original error.
///
/// A failed commit surfaces as the storage error; a failed rollback is logged and
/// the original error is preserved.
pub async fn finish<T, E>(txn: DatabaseTransaction, result: Result<T, E>) -> Result<T, E>
where
    E: From<DbErr>,
{
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Failed to roll back transaction: {}", rollback_err);
            }
            Err(err)
        }
    }
}
