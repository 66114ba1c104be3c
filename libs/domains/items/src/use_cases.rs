//! One struct per operation, each holding only the shared repository.
//!
//! Every `execute` validates its input before the single repository call,
//! so malformed requests never reach storage.

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemRepository;
use crate::validation::{parse_id, validate_changes, validate_new_item};

/// Validates a create payload and persists the item.
///
/// Nothing is written unless every field check passes.
pub struct CreateItemUseCase<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> Clone for CreateItemUseCase<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ItemRepository> CreateItemUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, input: CreateItem) -> ItemResult<Item> {
        let new_item = validate_new_item(&input)?;
        self.repository.create(new_item).await
    }
}

/// Looks up a single item by its raw path id.
pub struct GetItemByIdUseCase<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> Clone for GetItemByIdUseCase<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ItemRepository> GetItemByIdUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: &str) -> ItemResult<Item> {
        let uuid = parse_id(id)?;
        self.repository
            .find_by_id(uuid)
            .await?
            .ok_or_else(|| ItemError::not_found(id))
    }
}

pub struct GetAllItemsUseCase<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> Clone for GetAllItemsUseCase<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ItemRepository> GetAllItemsUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> ItemResult<Vec<Item>> {
        self.repository.find_all().await
    }
}

/// Applies a partial update. Absent fields keep their stored value.
pub struct UpdateItemUseCase<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> Clone for UpdateItemUseCase<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ItemRepository> UpdateItemUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: &str, input: UpdateItem) -> ItemResult<Item> {
        let uuid = parse_id(id)?;
        let changes = validate_changes(&input)?;
        self.repository
            .update(uuid, changes)
            .await?
            .ok_or_else(|| ItemError::not_found(id))
    }
}

pub struct DeleteItemUseCase<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> Clone for DeleteItemUseCase<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ItemRepository> DeleteItemUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: &str) -> ItemResult<()> {
        let uuid = parse_id(id)?;
        if !self.repository.delete_by_id(uuid).await? {
            return Err(ItemError::not_found(id));
        }
        Ok(())
    }
}

/// The five item operations over one shared repository.
pub struct ItemUseCases<R: ItemRepository> {
    pub create: CreateItemUseCase<R>,
    pub get_by_id: GetItemByIdUseCase<R>,
    pub get_all: GetAllItemsUseCase<R>,
    pub update: UpdateItemUseCase<R>,
    pub delete: DeleteItemUseCase<R>,
}

impl<R: ItemRepository> ItemUseCases<R> {
    pub fn new(repository: R) -> Self {
        Self::from_shared(Arc::new(repository))
    }

    pub fn from_shared(repository: Arc<R>) -> Self {
        Self {
            create: CreateItemUseCase::new(Arc::clone(&repository)),
            get_by_id: GetItemByIdUseCase::new(Arc::clone(&repository)),
            get_all: GetAllItemsUseCase::new(Arc::clone(&repository)),
            update: UpdateItemUseCase::new(Arc::clone(&repository)),
            delete: DeleteItemUseCase::new(repository),
        }
    }
}

impl<R: ItemRepository> Clone for ItemUseCases<R> {
    fn clone(&self) -> Self {
        Self {
            create: self.create.clone(),
            get_by_id: self.get_by_id.clone(),
            get_all: self.get_all.clone(),
            update: self.update.clone(),
            delete: self.delete.clone(),
        }
    }
}
