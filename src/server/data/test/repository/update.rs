use super::*;

/// Tests overwriting a row.
///
/// Verifies that every column of the stored row is replaced by the model's values.
///
/// Expected: Ok with updated engine persisted
#[tokio::test]
async fn overwrites_all_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let engine = factory::create_engine(db).await?;

    let repo = Repository::<entity::prelude::Engine>::new(db);
    let changed = entity::engine::Model {
        engine_id: engine.engine_id,
        displacement: 3000,
        no_of_cylinders: 6,
        car_range: 0,
    };
    let result = repo.update(changed.clone()).await;

    assert_eq!(result.unwrap(), changed);

    let stored = entity::prelude::Engine::find_by_id(engine.engine_id)
        .one(db)
        .await?;
    assert_eq!(stored, Some(changed));

    Ok(())
}

/// Tests updating a row that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn reports_missing_row_as_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = Repository::<entity::prelude::Engine>::new(db);
    let result = repo
        .update(entity::engine::Model {
            engine_id: Uuid::new_v4(),
            displacement: 1000,
            no_of_cylinders: 3,
            car_range: 100,
        })
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));

    Ok(())
}
