use super::*;

/// Tests brand lookup with engines requested.
///
/// Verifies that only cars of the requested brand are returned and that each one
/// carries its engine.
///
/// Expected: Ok with two cars, engines loaded
#[tokio::test]
async fn loads_engines_when_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let engine = factory::create_engine(db).await?;
    for brand in ["Toyota", "Toyota", "Ford"] {
        factory::car::CarFactory::new(db, engine.engine_id)
            .brand(brand)
            .build()
            .await?;
    }

    let repo = CarRepository::new(db);
    let cars = repo.get_by_brand("Toyota", true).await.unwrap();

    assert_eq!(cars.len(), 2);
    assert!(cars.iter().all(|car| car.brand == "Toyota"));
    assert!(cars
        .iter()
        .all(|car| car.engine.as_ref().map(|e| e.engine_id) == Some(engine.engine_id)));

    Ok(())
}

/// Tests brand lookup without engines.
///
/// Expected: Ok with cars, no engine attached
#[tokio::test]
async fn omits_engines_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_car_with_engine(db).await?;

    let repo = CarRepository::new(db);
    let cars = repo.get_by_brand("Toyota", false).await.unwrap();

    assert_eq!(cars.len(), 1);
    assert!(cars[0].engine.is_none());

    Ok(())
}

/// Tests brand lookup with no matching cars.
///
/// The repository returns an empty list; turning that into a not-found response
/// is left to the service.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_unknown_brand() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_car_with_engine(db).await?;

    let repo = CarRepository::new(db);
    let cars = repo.get_by_brand("toyota", true).await.unwrap();

    assert!(cars.is_empty());

    Ok(())
}
