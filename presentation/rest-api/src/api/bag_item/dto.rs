use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use poem_openapi::Object;

use business::domain::bag_item::model::BagItem;

/// Renders an exact amount as a JSON number.
pub fn to_amount(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddBagItemRequest {
    /// Owner of the bag; the bag is created on first use
    pub user_name: String,
    /// Catalog product identifier
    pub product_id: String,
    /// Units to add (must be positive)
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateBagItemRequest {
    /// New quantity; zero or negative removes the item
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct BagItemResponse {
    /// Bag item unique identifier
    pub id: String,
    /// Product identifier
    pub product_id: String,
    /// Product name
    pub product_name: String,
    /// Current unit price of the product
    pub price_per_item: f64,
    /// Units in the bag
    pub quantity: i32,
    /// quantity * price_per_item
    pub total_price: f64,
}

impl From<BagItem> for BagItemResponse {
    fn from(item: BagItem) -> Self {
        Self {
            id: item.id.to_string(),
            product_id: item.product.id.to_string(),
            price_per_item: to_amount(item.price_per_item()),
            total_price: to_amount(&item.total_price),
            product_name: item.product.name,
            quantity: item.quantity,
        }
    }
}
