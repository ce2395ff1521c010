use super::*;

/// Tests deleting a server wired to two switches.
///
/// Expected: server and its associations gone, switches kept, then NotFound
#[tokio::test]
async fn removes_server_and_associations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, stored) = factory::helpers::create_server_with_dependencies(db).await?;
    factory::helpers::create_switch_for_server(db, stored.id).await?;
    factory::helpers::create_switch_for_server(db, stored.id).await?;

    let service = ServerService::new(db);
    service.delete(stored.id).await?;

    assert_eq!(entity::prelude::SwitchToServer::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Switch::find().count(db).await?, 2);
    assert_eq!(
        service.get_by_id(stored.id).await.unwrap_err().kind(),
        ErrorKind::NotFound
    );

    Ok(())
}

/// Tests deleting an unknown ID.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let err = ServerService::new(db).delete(999).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);

    Ok(())
}
