use super::*;

/// Tests creating a server through the service.
///
/// Expected: Ok with both timestamps equal and the configuration as sent
#[tokio::test]
async fn creates_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let datacenter = factory::create_datacenter(db).await?;

    let server = ServerService::new(db)
        .create(&json!({
            "hostname": "web-01",
            "configuration": {"cpu_cores": 4, "ram_gb": 16},
            "datacenter_id": datacenter.id,
        }))
        .await?;

    assert_eq!(server.hostname, "web-01");
    assert_eq!(server.datacenter_id, datacenter.id);
    assert_eq!(server.configuration.get("cpu_cores"), Some(&json!(4)));
    assert_eq!(server.created_at, server.modified_at);

    Ok(())
}

/// Tests creating a server that references a missing datacenter.
///
/// Expected: Err(ForeignKeyViolation) and no server row
#[tokio::test]
async fn rejects_missing_datacenter_without_writing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ServerService::new(db)
        .create(&json!({"hostname": "web-01", "datacenter_id": 999}))
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ForeignKeyViolation);
    assert_eq!(err.to_string(), "Datacenter with id 999 does not exist");
    assert_eq!(entity::prelude::Server::find().count(db).await?, 0);

    Ok(())
}

/// Tests that out-of-range configuration is rejected before anything is written.
///
/// Expected: Err(ConfigurationOutOfRange)
#[tokio::test]
async fn rejects_out_of_range_configuration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let datacenter = factory::create_datacenter(db).await?;

    let result = ServerService::new(db)
        .create(&json!({
            "hostname": "web-01",
            "configuration": {"cpu_cores": 0},
            "datacenter_id": datacenter.id,
        }))
        .await;

    assert_eq!(
        result.unwrap_err().kind(),
        ErrorKind::ConfigurationOutOfRange
    );
    assert_eq!(entity::prelude::Server::find().count(db).await?, 0);

    Ok(())
}

/// Tests the boundary values of both bounded keys.
///
/// Expected: Ok for 1/128 cores and 1/4096 GB
#[tokio::test]
async fn accepts_boundary_configuration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let datacenter = factory::create_datacenter(db).await?;
    let service = ServerService::new(db);

    for (cores, ram) in [(1, 1), (128, 4096)] {
        let server = service
            .create(&json!({
                "hostname": format!("edge-{}", cores),
                "configuration": {"cpu_cores": cores, "ram_gb": ram},
                "datacenter_id": datacenter.id,
            }))
            .await?;

        assert_eq!(server.configuration.get("ram_gb"), Some(&json!(ram)));
    }

    Ok(())
}

/// Tests a payload missing the hostname.
///
/// Expected: Err(ValidationError)
#[tokio::test]
async fn rejects_missing_hostname() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let datacenter = factory::create_datacenter(db).await?;

    let result = ServerService::new(db)
        .create(&json!({"datacenter_id": datacenter.id}))
        .await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::ValidationError);

    Ok(())
}
