use super::*;

/// Tests creating a server.
///
/// Verifies that both timestamps are identical and the configuration is stored
/// as given.
///
/// Expected: Ok with created_at == modified_at
#[tokio::test]
async fn creates_server_with_equal_timestamps() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let datacenter = factory::create_datacenter(db).await?;

    let server = ServerRepository::new(db)
        .create(
            CreateServerParams {
                hostname: "web-01".to_string(),
                configuration: json!({"cpu_cores": 4, "ram_gb": 16})
                    .as_object()
                    .cloned()
                    .unwrap(),
                datacenter_id: datacenter.id,
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(server.hostname, "web-01");
    assert_eq!(server.datacenter_id, datacenter.id);
    assert_eq!(server.configuration, json!({"cpu_cores": 4, "ram_gb": 16}));
    assert_eq!(server.created_at, server.modified_at);

    Ok(())
}

/// Tests that the foreign key constraint backs up the integrity check.
///
/// Expected: Err and no row stored
#[tokio::test]
async fn fails_for_missing_datacenter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ServerRepository::new(db)
        .create(
            CreateServerParams {
                hostname: "web-01".to_string(),
                configuration: Default::default(),
                datacenter_id: 999,
            },
            Utc::now(),
        )
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Server::find().count(db).await?, 0);

    Ok(())
}
