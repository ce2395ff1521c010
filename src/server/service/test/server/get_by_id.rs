use super::*;

#[tokio::test]
async fn returns_stored_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, stored) = factory::helpers::create_server_with_dependencies(db).await?;

    let server = ServerService::new(db).get_by_id(stored.id).await?;

    assert_eq!(server.id, stored.id);
    assert_eq!(server.hostname, stored.hostname);

    Ok(())
}

#[tokio::test]
async fn returns_not_found_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let err = ServerService::new(db).get_by_id(999).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "Server with id 999 not found");

    Ok(())
}
