use super::*;

/// Tests getting an engine by ID.
///
/// Expected: Ok with engine
#[tokio::test]
async fn returns_engine() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let engine = factory::engine::EngineFactory::new(db)
        .car_range(0)
        .build()
        .await?;

    let repo = EngineRepository::new(db);
    let found = repo.get_by_id(engine.engine_id).await.unwrap();

    assert_eq!(found.engine_id, engine.engine_id);
    assert_eq!(found.car_range, 0);

    Ok(())
}

/// Tests getting an engine that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EngineRepository::new(db);
    let result = repo.get_by_id(Uuid::new_v4()).await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));

    Ok(())
}
