use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::bag_item::model::BagItem;
use business::domain::bag_item::repository::BagItemRepository;
use business::domain::errors::RepositoryError;

use super::entity::{BAG_ITEM_COLUMNS, BagItemEntity};
use crate::db::query_error;

pub struct BagItemRepositoryPostgres {
    pool: PgPool,
}

impl BagItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BagItemRepository for BagItemRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<BagItem, RepositoryError> {
        let entity = sqlx::query_as::<_, BagItemEntity>(&format!(
            "SELECT {BAG_ITEM_COLUMNS} FROM bag_items bi \
             JOIN products p ON p.id = bi.product_id WHERE bi.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_bag_id(&self, bag_id: Uuid) -> Result<Vec<BagItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, BagItemEntity>(&format!(
            "SELECT {BAG_ITEM_COLUMNS} FROM bag_items bi \
             JOIN products p ON p.id = bi.product_id WHERE bi.bag_id = $1"
        ))
        .bind(bag_id)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
