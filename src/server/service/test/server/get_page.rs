use super::*;

/// Tests the default window.
///
/// Expected: first 100 of 150 servers
#[tokio::test]
async fn defaults_to_first_hundred() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let datacenter = factory::create_datacenter(db).await?;
    for _ in 0..150 {
        factory::create_server(db, datacenter.id).await?;
    }

    let service = ServerService::new(db);
    let first = service.get_page(None, None).await?;
    let rest = service.get_page(Some(100), Some(100)).await?;

    assert_eq!(first.len(), 100);
    assert_eq!(rest.len(), 50);
    assert!(first
        .iter()
        .all(|server| rest.iter().all(|other| other.id != server.id)));

    Ok(())
}

/// Tests a negative skip.
///
/// Expected: Err(ValidationError)
#[tokio::test]
async fn rejects_negative_skip() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ServerService::new(db).get_page(Some(-1), None).await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::ValidationError);

    Ok(())
}
