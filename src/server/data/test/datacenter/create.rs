use super::*;

/// Tests creating a datacenter.
///
/// Expected: Ok with the row stored under a fresh ID
#[tokio::test]
async fn creates_datacenter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = DatacenterRepository::new(db);
    let datacenter = repo
        .create(
            CreateDatacenterParams {
                name: "Frankfurt".to_string(),
            },
            now,
        )
        .await?;

    assert!(datacenter.id > 0);
    assert_eq!(datacenter.name, "Frankfurt");
    assert_eq!(datacenter.created_at, now);

    let stored = repo.get_by_id(datacenter.id).await?;
    assert_eq!(stored, Some(datacenter));

    Ok(())
}
