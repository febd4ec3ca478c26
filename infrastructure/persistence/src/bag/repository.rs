use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::bag::model::Bag;
use business::domain::bag::repository::BagRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserName;

use super::entity::{BAG_COLUMNS, BagEntity, assemble_bags};
use crate::bag_item::entity::{BAG_ITEM_COLUMNS, BagItemEntity};
use crate::db::query_error;

/// Rows to delete on save: only lines explicitly removed from this copy.
/// Lines merely absent from it (written elsewhere after it was loaded) stay.
fn item_ids_to_delete(bag: &Bag) -> Vec<Uuid> {
    bag.removed_item_ids()
        .iter()
        .copied()
        .filter(|id| bag.find_item(*id).is_none())
        .collect()
}

pub struct BagRepositoryPostgres {
    pool: PgPool,
}

impl BagRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_items(&self, bag_ids: &[Uuid]) -> Result<Vec<BagItemEntity>, RepositoryError> {
        sqlx::query_as::<_, BagItemEntity>(&format!(
            "SELECT {BAG_ITEM_COLUMNS} FROM bag_items bi \
             JOIN products p ON p.id = bi.product_id WHERE bi.bag_id = ANY($1)"
        ))
        .bind(bag_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn load_one(&self, bag: Option<BagEntity>) -> Result<Option<Bag>, RepositoryError> {
        let Some(bag) = bag else {
            return Ok(None);
        };
        let items = self.load_items(&[bag.id]).await?;
        Ok(assemble_bags(vec![bag], items).pop())
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Bag>, RepositoryError> {
        let entity = sqlx::query_as::<_, BagEntity>(&format!(
            "SELECT {BAG_COLUMNS} FROM bags b JOIN users u ON u.id = b.user_id \
             WHERE b.user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error)?;

        self.load_one(entity).await
    }
}

#[async_trait]
impl BagRepository for BagRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Bag>, RepositoryError> {
        let bags = sqlx::query_as::<_, BagEntity>(&format!(
            "SELECT {BAG_COLUMNS} FROM bags b JOIN users u ON u.id = b.user_id \
             ORDER BY b.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)?;

        let ids: Vec<Uuid> = bags.iter().map(|b| b.id).collect();
        let items = self.load_items(&ids).await?;

        Ok(assemble_bags(bags, items))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Bag, RepositoryError> {
        let entity = sqlx::query_as::<_, BagEntity>(&format!(
            "SELECT {BAG_COLUMNS} FROM bags b JOIN users u ON u.id = b.user_id \
             WHERE b.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error)?;

        self.load_one(entity).await?.ok_or(RepositoryError::NotFound)
    }

    async fn find_by_user_name(
        &self,
        user_name: &UserName,
    ) -> Result<Option<Bag>, RepositoryError> {
        let entity = sqlx::query_as::<_, BagEntity>(&format!(
            "SELECT {BAG_COLUMNS} FROM bags b JOIN users u ON u.id = b.user_id \
             WHERE u.user_name = $1"
        ))
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error)?;

        self.load_one(entity).await
    }

    async fn create_if_absent(&self, bag: &Bag) -> Result<Bag, RepositoryError> {
        let result = sqlx::query(
            r#"INSERT INTO bags (id, user_id, total_items, total_price, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO NOTHING"#,
        )
        .bind(bag.id)
        .bind(bag.user_id)
        .bind(bag.total_items())
        .bind(bag.total_price())
        .bind(bag.created_at)
        .bind(bag.updated_at)
        .execute(&self.pool)
        .await
        .map_err(query_error)?;

        if result.rows_affected() == 0 {
            tracing::debug!(user_id = %bag.user_id, "bag already existed for user");
        }

        self.find_by_user_id(bag.user_id)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, bag: &Bag) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!(error = %e, "failed to open transaction");
            RepositoryError::Persistence
        })?;

        sqlx::query(
            r#"INSERT INTO bags (id, user_id, total_items, total_price, created_at, updated_at)
            VALUES ($1, $2, 0, 0, $3, $4)
            ON CONFLICT (id) DO UPDATE SET updated_at = EXCLUDED.updated_at"#,
        )
        .bind(bag.id)
        .bind(bag.user_id)
        .bind(bag.created_at)
        .bind(bag.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(query_error)?;

        let removed = item_ids_to_delete(bag);
        if !removed.is_empty() {
            sqlx::query("DELETE FROM bag_items WHERE bag_id = $1 AND id = ANY($2)")
                .bind(bag.id)
                .bind(&removed)
                .execute(&mut *tx)
                .await
                .map_err(query_error)?;
        }

        for item in bag.items() {
            sqlx::query(
                r#"INSERT INTO bag_items (id, bag_id, product_id, quantity, unit_price, total_price)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (id) DO UPDATE SET
                    quantity = EXCLUDED.quantity,
                    unit_price = EXCLUDED.unit_price,
                    total_price = EXCLUDED.total_price"#,
            )
            .bind(item.id)
            .bind(bag.id)
            .bind(item.product.id)
            .bind(item.quantity)
            .bind(item.price_per_item())
            .bind(&item.total_price)
            .execute(&mut *tx)
            .await
            .map_err(query_error)?;
        }

        // Totals come from the rows as committed, including lines written by
        // other requests since this copy was loaded.
        sqlx::query(
            r#"UPDATE bags SET
                total_items = COALESCE((SELECT SUM(quantity) FROM bag_items WHERE bag_id = $1), 0),
                total_price = COALESCE((SELECT SUM(total_price) FROM bag_items WHERE bag_id = $1), 0)
            WHERE id = $1"#,
        )
        .bind(bag.id)
        .execute(&mut *tx)
        .await
        .map_err(query_error)?;

        tx.commit().await.map_err(|e| {
            tracing::error!(error = %e, bag_id = %bag.id, "failed to commit bag");
            RepositoryError::Persistence
        })
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        // bag_items rows go with the bag (ON DELETE CASCADE)
        sqlx::query("DELETE FROM bags WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(())
    }
}
