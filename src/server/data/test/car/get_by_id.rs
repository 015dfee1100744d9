use super::*;

/// Tests getting a car by ID.
///
/// Expected: Ok with car and its engine
#[tokio::test]
async fn returns_car_with_engine() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (engine, car) = factory::helpers::create_car_with_engine(db).await?;

    let repo = CarRepository::new(db);
    let found = repo.get_by_id(car.id).await.unwrap();

    assert_eq!(found.id, car.id);
    assert_eq!(found.name, car.name);
    assert_eq!(found.engine.map(|e| e.engine_id), Some(engine.engine_id));

    Ok(())
}

/// Tests getting a car that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let result = repo.get_by_id(Uuid::new_v4()).await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));

    Ok(())
}
