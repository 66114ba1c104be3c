//! Integration tests for the Items domain
//!
//! Run `PgItemRepository` against real PostgreSQL via testcontainers:
//! - Rows round-trip through the `items` table
//! - Ordering, partial updates and deletes behave like the in-memory adapter
//! - The schema's price constraint holds

use domain_items::*;
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};
use uuid::Uuid;

#[tokio::test]
async fn test_create_and_find_item() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_find");

    let input = NewItem {
        name: builder.name("item", "main"),
        price: builder.price(),
    };

    let created = repo.create(input.clone()).await.unwrap();
    assert_eq!(created.name, input.name);
    assert_price_eq(created.price, input.price, "created price");

    let found = assert_some(repo.find_by_id(created.id).await.unwrap(), "item should exist");
    assert_eq!(found, created);
}

#[tokio::test]
async fn test_find_missing_item() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());

    assert!(repo.find_by_id(Uuid::now_v7()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_all_oldest_first() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("find_all_order");

    let mut created = Vec::new();
    for i in 0..3 {
        let item = repo
            .create(NewItem {
                name: builder.name("item", &i.to_string()),
                price: i as f64,
            })
            .await
            .unwrap();
        created.push(item);
    }

    assert_eq!(repo.find_all().await.unwrap(), created);
}

#[tokio::test]
async fn test_partial_update() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());

    let created = repo
        .create(NewItem {
            name: "Laptop Pro".to_string(),
            price: 1200.0,
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            ItemChanges {
                name: Some("Laptop Pro X".to_string()),
                price: None,
            },
        )
        .await
        .unwrap();
    let updated = assert_some(updated, "update should find the item");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Laptop Pro X");
    assert_price_eq(updated.price, 1200.0, "price unchanged");

    let reloaded = assert_some(repo.find_by_id(created.id).await.unwrap(), "item exists");
    assert_eq!(reloaded, updated);
}

#[tokio::test]
async fn test_update_missing_item() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());

    let result = repo
        .update(
            Uuid::now_v7(),
            ItemChanges {
                name: None,
                price: Some(1.0),
            },
        )
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_item() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());

    let created = repo
        .create(NewItem {
            name: "Cable".to_string(),
            price: 5.0,
        })
        .await
        .unwrap();

    assert!(repo.delete_by_id(created.id).await.unwrap());
    assert!(!repo.delete_by_id(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_negative_price_rejected_by_schema() {
    let db = TestDatabase::new().await;

    let mut row: entity::ActiveModel = NewItem {
        name: "Broken".to_string(),
        price: 1.0,
    }
    .into();
    row.price = Set(-1.0);

    let result = row.insert(&db.connection).await;

    assert!(result.is_err(), "check constraint should reject negative price");
}

#[tokio::test]
async fn test_use_cases_over_postgres() {
    let db = TestDatabase::new().await;
    let use_cases = ItemUseCases::new(PgItemRepository::new(db.connection()));

    let created = use_cases
        .create
        .execute(serde_json::from_value(serde_json::json!({ "name": "Desk", "price": 250 })).unwrap())
        .await
        .unwrap();

    let fetched = use_cases
        .get_by_id
        .execute(&created.id.to_string())
        .await
        .unwrap();
    assert_eq!(fetched, created);

    let missing = use_cases
        .get_by_id
        .execute("00000000-0000-0000-0000-000000000000")
        .await;
    assert!(matches!(missing, Err(ItemError::NotFound(_))));
}
