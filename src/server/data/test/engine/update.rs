use super::*;

/// Tests overwriting an engine.
///
/// Expected: Ok with new values persisted under the same ID
#[tokio::test]
async fn overwrites_engine() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let engine = factory::create_engine(db).await?;

    let repo = EngineRepository::new(db);
    let updated = repo
        .update(
            engine.engine_id,
            EngineParams {
                displacement: 4000,
                no_of_cylinders: 8,
                car_range: 350,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.engine_id, engine.engine_id);
    assert_eq!(updated.displacement, 4000);

    let stored = entity::prelude::Engine::find_by_id(engine.engine_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.no_of_cylinders, 8);
    assert_eq!(stored.car_range, 350);

    Ok(())
}

/// Tests updating an engine that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EngineRepository::new(db);
    let result = repo.update(Uuid::new_v4(), params()).await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));

    Ok(())
}
