use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ItemResult;
use crate::models::{Item, ItemChanges, NewItem};

/// Repository trait for Item persistence.
///
/// A missing record is reported as `None` or `false`, never as an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persist a new item and assign its id
    async fn create(&self, input: NewItem) -> ItemResult<Item>;

    async fn find_by_id(&self, id: Uuid) -> ItemResult<Option<Item>>;

    /// All items, oldest first
    async fn find_all(&self) -> ItemResult<Vec<Item>>;

    /// Apply `changes` to an existing item and return the result
    async fn update(&self, id: Uuid, changes: ItemChanges) -> ItemResult<Option<Item>>;

    /// Returns `true` if an item was removed
    async fn delete_by_id(&self, id: Uuid) -> ItemResult<bool>;
}

#[derive(Debug, Clone)]
struct StoredItem {
    seq: u64,
    item: Item,
}

/// In-memory implementation of ItemRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<HashMap<Uuid, StoredItem>>>,
    next_seq: Arc<AtomicU64>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: NewItem) -> ItemResult<Item> {
        let item = Item::new(Uuid::now_v7(), input);
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);

        self.items.write().await.insert(
            item.id,
            StoredItem {
                seq,
                item: item.clone(),
            },
        );

        tracing::info!(item_id = %item.id, "Created item");
        Ok(item)
    }

    async fn find_by_id(&self, id: Uuid) -> ItemResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(&id).map(|stored| stored.item.clone()))
    }

    async fn find_all(&self) -> ItemResult<Vec<Item>> {
        let items = self.items.read().await;

        let mut stored: Vec<&StoredItem> = items.values().collect();
        stored.sort_by_key(|s| s.seq);

        Ok(stored.into_iter().map(|s| s.item.clone()).collect())
    }

    async fn update(&self, id: Uuid, changes: ItemChanges) -> ItemResult<Option<Item>> {
        let mut items = self.items.write().await;

        let Some(stored) = items.get_mut(&id) else {
            return Ok(None);
        };

        stored.item.apply_changes(changes);

        tracing::info!(item_id = %id, "Updated item");
        Ok(Some(stored.item.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> ItemResult<bool> {
        let mut items = self.items.write().await;

        if items.remove(&id).is_some() {
            tracing::info!(item_id = %id, "Deleted item");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(name: &str, price: f64) -> NewItem {
        NewItem {
            name: name.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryItemRepository::new();

        let created = repo.create(new_item("Keyboard", 80.0)).await.unwrap();
        let found = repo.find_by_id(created.id).await.unwrap();

        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_find_all_preserves_insertion_order() {
        let repo = InMemoryItemRepository::new();

        let mut expected = Vec::new();
        for (i, name) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            expected.push(repo.create(new_item(name, i as f64)).await.unwrap());
        }

        assert_eq!(repo.find_all().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryItemRepository::new();

        let result = repo
            .update(Uuid::now_v7(), ItemChanges::default())
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_applies_present_fields() {
        let repo = InMemoryItemRepository::new();
        let created = repo.create(new_item("Monitor", 300.0)).await.unwrap();

        let updated = repo
            .update(
                created.id,
                ItemChanges {
                    name: Some("Monitor 4K".to_string()),
                    price: None,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Monitor 4K");
        assert_eq!(updated.price, 300.0);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = InMemoryItemRepository::new();
        let created = repo.create(new_item("Cable", 5.0)).await.unwrap();

        assert!(repo.delete_by_id(created.id).await.unwrap());
        assert!(!repo.delete_by_id(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryItemRepository::new();
        let other = repo.clone();

        let created = repo.create(new_item("Desk", 150.0)).await.unwrap();

        assert!(other.find_by_id(created.id).await.unwrap().is_some());
    }
}
