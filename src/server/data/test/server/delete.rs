use super::*;

/// Tests deleting a server without associations.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, server) = factory::helpers::create_server_with_dependencies(db).await?;

    let repo = ServerRepository::new(db);

    assert!(repo.delete(server.id).await?);
    assert_eq!(repo.get_by_id(server.id).await?, None);

    Ok(())
}

/// Tests deleting an unknown ID.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!ServerRepository::new(db).delete(999).await?);

    Ok(())
}

/// Tests that a wired server cannot be deleted before its associations.
///
/// Expected: Err from the association foreign key
#[tokio::test]
async fn fails_while_associations_remain() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, server) = factory::helpers::create_server_with_dependencies(db).await?;
    factory::helpers::create_switch_for_server(db, server.id).await?;

    let result = ServerRepository::new(db).delete(server.id).await;

    assert!(result.is_err());

    Ok(())
}
