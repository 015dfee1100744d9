use super::*;

/// Tests creating a car for an existing engine.
///
/// Verifies that the car receives a generated ID, stores the validated fields and
/// is returned with its engine loaded.
///
/// Expected: Ok with car embedding the engine
#[tokio::test]
async fn creates_car_with_engine() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let engine = factory::create_engine(db).await?;

    let repo = CarRepository::new(db);
    let car = repo.create(params(engine.engine_id)).await.unwrap();

    assert_eq!(car.name, "X");
    assert_eq!(car.year, "2020");
    assert_eq!(car.fuel_type, "Petrol");
    assert_eq!(car.engine_id, engine.engine_id);
    assert_eq!(car.created_at, car.updated_at);

    let embedded = car.engine.unwrap();
    assert_eq!(embedded.engine_id, engine.engine_id);
    assert_eq!(embedded.displacement, 1500);

    let stored = entity::prelude::Car::find_by_id(car.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests creating a car whose engine does not exist.
///
/// Verifies that the association check reports a dedicated error instead of a
/// foreign key failure from the database, and that nothing is written.
///
/// Expected: Err(EngineNotFound)
#[tokio::test]
async fn fails_for_missing_engine() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let result = repo.create(params(Uuid::nil())).await;

    match result {
        Err(RepositoryError::EngineNotFound(id)) => assert_eq!(id, Uuid::nil()),
        other => panic!("expected EngineNotFound, got {other:?}"),
    }

    let cars = entity::prelude::Car::find().all(db).await?;
    assert!(cars.is_empty());

    Ok(())
}

/// Tests that each created car receives a distinct ID.
///
/// Expected: Ok with two different IDs
#[tokio::test]
async fn generates_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let engine = factory::create_engine(db).await?;

    let repo = CarRepository::new(db);
    let first = repo.create(params(engine.engine_id)).await.unwrap();
    let second = repo.create(params(engine.engine_id)).await.unwrap();

    assert_ne!(first.id, second.id);

    Ok(())
}
