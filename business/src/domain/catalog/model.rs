use bigdecimal::BigDecimal;
use uuid::Uuid;

/// Catalog product as seen by the bag: identity, display name and unit price.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
}

impl Product {
    pub fn from_repository(id: Uuid, name: String, price: BigDecimal) -> Self {
        Self { id, name, price }
    }
}
