use super::*;

/// Tests fetching a row by condition.
///
/// Verifies that the repository returns the row matching the primary key
/// condition.
///
/// Expected: Ok with matching engine
#[tokio::test]
async fn returns_matching_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let engine = factory::create_engine(db).await?;
    factory::create_engine(db).await?;

    let repo = Repository::<entity::prelude::Engine>::new(db);
    let result = repo
        .get(entity::engine::Column::EngineId.eq(engine.engine_id))
        .await;

    assert_eq!(result.unwrap(), engine);

    Ok(())
}

/// Tests fetching a row that does not exist.
///
/// Verifies that a missing row is reported as its own error variant carrying the
/// table name, rather than as a database error.
///
/// Expected: Err(NotFound("engine"))
#[tokio::test]
async fn reports_missing_row_as_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = Repository::<entity::prelude::Engine>::new(db);
    let result = repo
        .get(entity::engine::Column::EngineId.eq(Uuid::new_v4()))
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound(table)) if table == "engine"));

    Ok(())
}

/// Tests eager loading of a related entity.
///
/// Verifies that the related engine is returned alongside the car.
///
/// Expected: Ok with car and Some(engine)
#[tokio::test]
async fn loads_related_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (engine, car) = factory::helpers::create_car_with_engine(db).await?;

    let repo = Repository::<entity::prelude::Car>::new(db);
    let (found, related) = repo
        .get_with_related(entity::prelude::Engine, entity::car::Column::Id.eq(car.id))
        .await
        .unwrap();

    assert_eq!(found.id, car.id);
    assert_eq!(related, Some(engine));

    Ok(())
}

/// Tests finding rows with and without their relation.
///
/// Verifies that only rows matching the condition are returned and that each one
/// carries its related row when requested.
///
/// Expected: Ok with two matching cars
#[tokio::test]
async fn finds_all_matching_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let engine = factory::create_engine(db).await?;
    for brand in ["Honda", "Honda", "Ford"] {
        factory::car::CarFactory::new(db, engine.engine_id)
            .brand(brand)
            .build()
            .await?;
    }

    let repo = Repository::<entity::prelude::Car>::new(db);

    let cars = repo
        .find(entity::car::Column::Brand.eq("Honda"))
        .await
        .unwrap();
    assert_eq!(cars.len(), 2);

    let with_engines = repo
        .find_with_related(
            entity::prelude::Engine,
            entity::car::Column::Brand.eq("Honda"),
        )
        .await
        .unwrap();
    assert_eq!(with_engines.len(), 2);
    assert!(with_engines
        .iter()
        .all(|(_, related)| related.as_ref() == Some(&engine)));

    let none = repo
        .find(entity::car::Column::Brand.eq("Tesla"))
        .await
        .unwrap();
    assert!(none.is_empty());

    Ok(())
}
