use super::*;

/// Tests deleting a car.
///
/// Verifies that the deleted record is returned with its engine and that the
/// engine itself is left in place.
///
/// Expected: Ok with deleted car
#[tokio::test]
async fn deletes_and_returns_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (engine, car) = factory::helpers::create_car_with_engine(db).await?;

    let repo = CarRepository::new(db);
    let deleted = repo.delete(car.id).await.unwrap();

    assert_eq!(deleted.id, car.id);
    assert_eq!(deleted.engine.map(|e| e.engine_id), Some(engine.engine_id));

    let check = entity::prelude::Car::find_by_id(car.id).one(db).await?;
    assert!(check.is_none());

    let engine_check = entity::prelude::Engine::find_by_id(engine.engine_id)
        .one(db)
        .await?;
    assert!(engine_check.is_some());

    Ok(())
}

/// Tests deleting a car that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let result = repo.delete(Uuid::new_v4()).await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));

    Ok(())
}
