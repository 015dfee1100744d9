use super::*;

/// Tests creating an engine.
///
/// Expected: Ok with engine persisted under a generated ID
#[tokio::test]
async fn creates_engine() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EngineRepository::new(db);
    let engine = repo.create(params()).await.unwrap();

    assert_ne!(engine.engine_id, Uuid::nil());
    assert_eq!(engine.displacement, 1500);
    assert_eq!(engine.no_of_cylinders, 4);
    assert_eq!(engine.car_range, 500);

    let stored = entity::prelude::Engine::find_by_id(engine.engine_id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}
