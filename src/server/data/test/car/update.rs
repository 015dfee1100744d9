use super::*;

/// Tests overwriting a car.
///
/// Verifies that all mutable fields change, `created_at` is preserved and
/// `updated_at` moves forward. The new engine is returned embedded.
///
/// Expected: Ok with updated car
#[tokio::test]
async fn overwrites_fields_and_refreshes_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_engine, car) = factory::helpers::create_car_with_engine(db).await?;
    let other_engine = factory::engine::EngineFactory::new(db)
        .displacement(2500)
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let updated = repo
        .update(
            car.id,
            CarParams {
                name: "Civic".to_string(),
                year: 2018,
                brand: "Honda".to_string(),
                fuel_type: FuelType::Hybrid,
                engine_id: other_engine.engine_id,
                price: 18500.5,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, car.id);
    assert_eq!(updated.name, "Civic");
    assert_eq!(updated.year, "2018");
    assert_eq!(updated.brand, "Honda");
    assert_eq!(updated.fuel_type, "Hybrid");
    assert_eq!(updated.price, 18500.5);
    assert_eq!(updated.engine_id, other_engine.engine_id);
    assert_eq!(updated.engine.map(|e| e.displacement), Some(2500));
    assert_eq!(updated.created_at, car.created_at);
    assert!(updated.updated_at >= car.updated_at);

    Ok(())
}

/// Tests updating a car to reference a missing engine.
///
/// Verifies that the association check fails before anything is written, leaving
/// the stored car exactly as it was.
///
/// Expected: Err(EngineNotFound), car unchanged
#[tokio::test]
async fn leaves_car_untouched_for_missing_engine() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_engine, car) = factory::helpers::create_car_with_engine(db).await?;

    let repo = CarRepository::new(db);
    let result = repo
        .update(
            car.id,
            CarParams {
                name: "Renamed".to_string(),
                ..params(Uuid::new_v4())
            },
        )
        .await;

    assert!(matches!(result, Err(RepositoryError::EngineNotFound(_))));

    let stored = entity::prelude::Car::find_by_id(car.id).one(db).await?;
    assert_eq!(stored, Some(car));

    Ok(())
}

/// Tests updating a car that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let engine = factory::create_engine(db).await?;

    let repo = CarRepository::new(db);
    let result = repo.update(Uuid::new_v4(), params(engine.engine_id)).await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));

    Ok(())
}
