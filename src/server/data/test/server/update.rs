use super::*;

/// Tests a hostname-only update.
///
/// Verifies that only the hostname and modification time change.
///
/// Expected: Ok with configuration, datacenter and created_at untouched
#[tokio::test]
async fn updates_hostname_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let datacenter = factory::create_datacenter(db).await?;
    let existing = factory::server::ServerFactory::new(db, datacenter.id)
        .configuration(json!({"cpu_cores": 4, "ram_gb": 16}))
        .timestamp(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let changes = UpdateServerParams {
        hostname: Some("web-02".to_string()),
        ..Default::default()
    };
    let update = ServerUpdate::build(&existing, &changes, Utc::now()).unwrap();
    let updated = ServerRepository::new(db).update(update).await?;

    assert_eq!(updated.hostname, "web-02");
    assert_eq!(updated.configuration, existing.configuration);
    assert_eq!(updated.datacenter_id, existing.datacenter_id);
    assert_eq!(updated.created_at, existing.created_at);
    assert!(updated.modified_at > existing.modified_at);

    Ok(())
}

/// Tests that a configuration fragment is merged onto the stored document.
///
/// Expected: {"cpu_cores": 8, "ram_gb": 16}
#[tokio::test]
async fn merges_configuration_fragment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let datacenter = factory::create_datacenter(db).await?;
    let existing = factory::server::ServerFactory::new(db, datacenter.id)
        .configuration(json!({"cpu_cores": 4, "ram_gb": 16}))
        .build()
        .await?;

    let changes = UpdateServerParams {
        configuration: json!({"cpu_cores": 8}).as_object().cloned(),
        ..Default::default()
    };
    let update = ServerUpdate::build(&existing, &changes, Utc::now()).unwrap();
    let updated = ServerRepository::new(db).update(update).await?;

    assert_eq!(updated.configuration, json!({"cpu_cores": 8, "ram_gb": 16}));
    assert_eq!(updated.hostname, existing.hostname);

    Ok(())
}

/// Tests moving a server to another datacenter.
///
/// Expected: Ok with the new datacenter ID stored
#[tokio::test]
async fn moves_server_to_other_datacenter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, existing) = factory::helpers::create_server_with_dependencies(db).await?;
    let target = factory::create_datacenter(db).await?;

    let changes = UpdateServerParams {
        datacenter_id: Some(target.id),
        ..Default::default()
    };
    let update = ServerUpdate::build(&existing, &changes, Utc::now()).unwrap();
    let updated = ServerRepository::new(db).update(update).await?;

    assert_eq!(updated.datacenter_id, target.id);

    Ok(())
}

/// Tests executing an update whose row has vanished.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_when_row_is_gone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, existing) = factory::helpers::create_server_with_dependencies(db).await?;
    let repo = ServerRepository::new(db);
    repo.delete(existing.id).await?;

    let changes = UpdateServerParams {
        hostname: Some("ghost".to_string()),
        ..Default::default()
    };
    let update = ServerUpdate::build(&existing, &changes, Utc::now()).unwrap();
    let result = repo.update(update).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
