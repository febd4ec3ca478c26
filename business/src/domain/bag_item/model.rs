use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::catalog::model::Product;

/// Line entry binding a product to a quantity inside one bag.
///
/// The product is a read-only snapshot of the catalog entry taken when the
/// line was last priced, so `total_price` always equals
/// `quantity * product.price`. The owning bag is referenced by id only.
#[derive(Debug, Clone, PartialEq)]
pub struct BagItem {
    pub id: Uuid,
    pub bag_id: Uuid,
    pub product: Product,
    pub quantity: i32,
    pub total_price: BigDecimal,
}

impl BagItem {
    pub fn new(bag_id: Uuid, product: Product, quantity: i32) -> Self {
        let mut item = Self {
            id: Uuid::new_v4(),
            bag_id,
            product,
            quantity,
            total_price: BigDecimal::from(0),
        };
        item.calculate_total_price();
        item
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        bag_id: Uuid,
        product: Product,
        quantity: i32,
        total_price: BigDecimal,
    ) -> Self {
        Self {
            id,
            bag_id,
            product,
            quantity,
            total_price,
        }
    }

    pub fn price_per_item(&self) -> &BigDecimal {
        &self.product.price
    }

    pub fn calculate_total_price(&mut self) {
        self.total_price = &self.product.price * BigDecimal::from(self.quantity);
    }
}
