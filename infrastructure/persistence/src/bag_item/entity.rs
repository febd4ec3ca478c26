use bigdecimal::BigDecimal;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::bag_item::model::BagItem;
use business::domain::catalog::model::Product;

/// Columns selected for every item query. The unit price is the one stored
/// on the line, so it always agrees with the stored total; the name comes
/// from the catalog.
pub const BAG_ITEM_COLUMNS: &str = "bi.id, bi.bag_id, bi.product_id, p.name AS product_name, \
     bi.unit_price AS product_price, bi.quantity, bi.total_price";

#[derive(Debug, FromRow)]
pub struct BagItemEntity {
    pub id: Uuid,
    pub bag_id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub product_price: BigDecimal,
    pub quantity: i32,
    pub total_price: BigDecimal,
}

impl BagItemEntity {
    pub fn into_domain(self) -> BagItem {
        BagItem::from_repository(
            self.id,
            self.bag_id,
            Product::from_repository(self.product_id, self.product_name, self.product_price),
            self.quantity,
            self.total_price,
        )
    }
}
