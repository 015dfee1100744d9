use super::*;

/// Tests counting rows matching a condition.
///
/// Expected: Ok with the number of cars referencing the engine
#[tokio::test]
async fn counts_matching_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let engine = factory::create_engine(db).await?;
    let unused = factory::create_engine(db).await?;
    factory::create_car(db, engine.engine_id).await?;
    factory::create_car(db, engine.engine_id).await?;

    let repo = Repository::<entity::prelude::Car>::new(db);

    let used = repo
        .count(entity::car::Column::EngineId.eq(engine.engine_id))
        .await
        .unwrap();
    let free = repo
        .count(entity::car::Column::EngineId.eq(unused.engine_id))
        .await
        .unwrap();

    assert_eq!(used, 2);
    assert_eq!(free, 0);

    Ok(())
}
