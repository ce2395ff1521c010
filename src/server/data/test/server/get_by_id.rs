use super::*;

/// Tests fetching a stored server.
///
/// Expected: Some with the stored row
#[tokio::test]
async fn returns_stored_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, server) = factory::helpers::create_server_with_dependencies(db).await?;

    let repo = ServerRepository::new(db);

    assert_eq!(repo.get_by_id(server.id).await?, Some(server.clone()));
    assert_eq!(repo.get_by_id_for_update(server.id).await?, Some(server));

    Ok(())
}

/// Tests fetching an unknown ID.
///
/// Expected: None
#[tokio::test]
async fn returns_none_for_missing_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);

    assert_eq!(repo.get_by_id(999).await?, None);
    assert_eq!(repo.get_by_id_for_update(999).await?, None);

    Ok(())
}
