use super::*;

/// Tests deleting an unreferenced engine.
///
/// Expected: Ok with deleted engine returned
#[tokio::test]
async fn deletes_unreferenced_engine() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let engine = factory::create_engine(db).await?;

    let repo = EngineRepository::new(db);
    let deleted = repo.delete(engine.engine_id).await.unwrap();

    assert_eq!(deleted.engine_id, engine.engine_id);

    let check = entity::prelude::Engine::find_by_id(engine.engine_id)
        .one(db)
        .await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting an engine that a car still references.
///
/// Verifies that the delete is refused and both rows remain.
///
/// Expected: Err(EngineInUse { cars: 1 })
#[tokio::test]
async fn refuses_engine_in_use() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (engine, car) = factory::helpers::create_car_with_engine(db).await?;

    let repo = EngineRepository::new(db);
    let result = repo.delete(engine.engine_id).await;

    assert!(matches!(
        result,
        Err(RepositoryError::EngineInUse { cars: 1, .. })
    ));

    let engine_check = entity::prelude::Engine::find_by_id(engine.engine_id)
        .one(db)
        .await?;
    let car_check = entity::prelude::Car::find_by_id(car.id).one(db).await?;
    assert!(engine_check.is_some());
    assert!(car_check.is_some());

    Ok(())
}

/// Tests deleting an engine that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EngineRepository::new(db);
    let result = repo.delete(Uuid::new_v4()).await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));

    Ok(())
}
