use super::*;

/// Tests that a configuration fragment is merged and the timestamp advances.
///
/// Expected: {"cpu_cores": 8, "ram_gb": 16}, later modified_at, same created_at
#[tokio::test]
async fn merges_configuration_and_advances_modified_at() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let datacenter = factory::create_datacenter(db).await?;
    let stored = factory::server::ServerFactory::new(db, datacenter.id)
        .configuration(json!({"cpu_cores": 4, "ram_gb": 16}))
        .timestamp(Utc::now() - Duration::minutes(5))
        .build()
        .await?;

    let server = ServerService::new(db)
        .update(stored.id, &json!({"configuration": {"cpu_cores": 8}}))
        .await?;

    assert_eq!(
        serde_json::Value::Object(server.configuration),
        json!({"cpu_cores": 8, "ram_gb": 16})
    );
    assert_eq!(server.hostname, stored.hostname);
    assert_eq!(server.created_at, stored.created_at);
    assert!(server.modified_at > stored.modified_at);

    Ok(())
}

/// Tests that modified_at is not moved backwards by a lagging clock.
///
/// Expected: modified_at equals the stored future timestamp
#[tokio::test]
async fn keeps_modified_at_monotonic() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let datacenter = factory::create_datacenter(db).await?;
    let stored = factory::server::ServerFactory::new(db, datacenter.id)
        .timestamp(Utc::now() + Duration::hours(1))
        .build()
        .await?;

    let server = ServerService::new(db)
        .update(stored.id, &json!({"hostname": "web-02"}))
        .await?;

    assert_eq!(server.modified_at, stored.modified_at);

    Ok(())
}

/// Tests an update without any recognized field against a missing server.
///
/// Validation runs before the lookup, so the empty change-set wins.
///
/// Expected: Err(EmptyUpdate)
#[tokio::test]
async fn rejects_empty_update_before_lookup() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ServerService::new(db);

    let unknown = service.update(999, &json!({})).await.unwrap_err();
    let ignored = service
        .update(999, &json!({"rack": "r12"}))
        .await
        .unwrap_err();

    assert_eq!(unknown.kind(), ErrorKind::EmptyUpdate);
    assert_eq!(unknown.to_string(), "No fields to update");
    assert_eq!(ignored.kind(), ErrorKind::EmptyUpdate);

    Ok(())
}

/// Tests a valid update against a missing server.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let err = ServerService::new(db)
        .update(999, &json!({"hostname": "ghost"}))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);

    Ok(())
}

/// Tests an update that moves a server to a missing datacenter.
///
/// Verifies that the hostname change in the same payload is rolled back.
///
/// Expected: Err(ForeignKeyViolation) and the stored row unchanged
#[tokio::test]
async fn rolls_back_on_missing_datacenter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, stored) = factory::helpers::create_server_with_dependencies(db).await?;

    let service = ServerService::new(db);
    let err = service
        .update(
            stored.id,
            &json!({"hostname": "moved", "datacenter_id": 999}),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ForeignKeyViolation);

    let after = service.get_by_id(stored.id).await?;
    assert_eq!(after.hostname, stored.hostname);
    assert_eq!(after.datacenter_id, stored.datacenter_id);
    assert_eq!(after.modified_at, stored.modified_at);

    Ok(())
}

/// Tests an out-of-range value in a configuration fragment.
///
/// Expected: Err(ConfigurationOutOfRange) and the stored configuration unchanged
#[tokio::test]
async fn rejects_out_of_range_fragment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let datacenter = factory::create_datacenter(db).await?;
    let stored = factory::server::ServerFactory::new(db, datacenter.id)
        .configuration(json!({"cpu_cores": 4}))
        .build()
        .await?;

    let service = ServerService::new(db);
    let err = service
        .update(stored.id, &json!({"configuration": {"ram_gb": 4097}}))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConfigurationOutOfRange);
    assert_eq!(
        serde_json::Value::Object(service.get_by_id(stored.id).await?.configuration),
        json!({"cpu_cores": 4})
    );

    Ok(())
}
