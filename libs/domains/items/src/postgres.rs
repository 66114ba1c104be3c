use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use uuid::Uuid;

use crate::{
    entity,
    error::ItemResult,
    models::{Item, ItemChanges, NewItem},
    repository::ItemRepository,
};

/// Postgres-backed ItemRepository over the `items` table.
#[derive(Clone)]
pub struct PgItemRepository {
    db: DatabaseConnection,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn create(&self, input: NewItem) -> ItemResult<Item> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(item_id = %model.id, "Created item");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> ItemResult<Option<Item>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> ItemResult<Vec<Item>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::CreatedAt)
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: Uuid, changes: ItemChanges) -> ItemResult<Option<Item>> {
        let Some(model) = entity::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        if changes.is_empty() {
            return Ok(Some(model.into()));
        }

        let mut active_model: entity::ActiveModel = model.into();
        if let Some(name) = changes.name {
            active_model.name = Set(name);
        }
        if let Some(price) = changes.price {
            active_model.price = Set(price);
        }
        active_model.updated_at = Set(Utc::now().into());

        match active_model.update(&self.db).await {
            Ok(updated) => {
                tracing::info!(item_id = %id, "Updated item");
                Ok(Some(updated.into()))
            }
            // Deleted between the read and the write
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> ItemResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(item_id = %id, "Deleted item");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
