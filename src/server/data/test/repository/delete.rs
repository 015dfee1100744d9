use super::*;

/// Tests deleting a row.
///
/// Expected: Ok with row removed
#[tokio::test]
async fn deletes_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let engine = factory::create_engine(db).await?;

    let repo = Repository::<entity::prelude::Engine>::new(db);
    let result = repo.delete(engine.clone()).await;

    assert!(result.is_ok());

    let check = entity::prelude::Engine::find_by_id(engine.engine_id)
        .one(db)
        .await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting a row twice.
///
/// Verifies that a delete affecting zero rows is reported as not found instead of
/// silently succeeding.
///
/// Expected: Err(NotFound) on the second delete
#[tokio::test]
async fn reports_zero_rows_as_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let engine = factory::create_engine(db).await?;

    let repo = Repository::<entity::prelude::Engine>::new(db);
    repo.delete(engine.clone()).await.unwrap();
    let result = repo.delete(engine).await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));

    Ok(())
}
