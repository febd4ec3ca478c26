use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::bag_item::model::BagItem;
use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::UserName;
use crate::domain::user::model::User;

/// A user's shopping bag and the items it owns.
///
/// `total_items` (sum of item quantities) and `total_price` (sum of item
/// totals) are derived from `items` and recomputed by every method that
/// changes the collection, so they are only readable from outside.
///
/// Items taken out with `remove_item` are remembered until the bag is
/// persisted; stores delete exactly those rows and never infer deletions
/// from what is missing in this copy.
#[derive(Debug, Clone)]
pub struct Bag {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: UserName,
    items: Vec<BagItem>,
    removed_item_ids: Vec<Uuid>,
    total_items: i64,
    total_price: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bag {
    pub fn new(owner: &User) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: owner.id,
            user_name: owner.user_name.clone(),
            items: Vec::new(),
            removed_item_ids: Vec::new(),
            total_items: 0,
            total_price: BigDecimal::from(0),
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository.
    ///
    /// Totals are rebuilt from `items` rather than trusted from storage.
    pub fn from_repository(
        id: Uuid,
        user_id: Uuid,
        user_name: UserName,
        items: Vec<BagItem>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        let mut bag = Self {
            id,
            user_id,
            user_name,
            items,
            removed_item_ids: Vec::new(),
            total_items: 0,
            total_price: BigDecimal::from(0),
            created_at,
            updated_at,
        };
        bag.refresh_totals();
        bag
    }

    pub fn items(&self) -> &[BagItem] {
        &self.items
    }

    /// Ids removed from this copy since it was loaded or created.
    pub fn removed_item_ids(&self) -> &[Uuid] {
        &self.removed_item_ids
    }

    pub fn total_items(&self) -> i64 {
        self.total_items
    }

    pub fn total_price(&self) -> &BigDecimal {
        &self.total_price
    }

    pub fn find_item(&self, item_id: Uuid) -> Option<&BagItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn find_item_by_product(&self, product_id: Uuid) -> Option<&BagItem> {
        self.items.iter().find(|item| item.product.id == product_id)
    }

    /// Adds `quantity` units of `product`. An existing line for the same
    /// product is incremented instead of duplicated.
    ///
    /// Returns `None`, leaving the bag untouched, when the merged quantity
    /// would not fit in an `i32`.
    pub fn add_product(&mut self, product: Product, quantity: i32) -> Option<BagItem> {
        let position = self
            .items
            .iter()
            .position(|item| item.product.id == product.id);

        let item = match position {
            Some(index) => {
                let item = &mut self.items[index];
                let merged = item.quantity.checked_add(quantity)?;
                item.product = product;
                item.quantity = merged;
                item.calculate_total_price();
                item.clone()
            }
            None => {
                let item = BagItem::new(self.id, product, quantity);
                self.items.push(item.clone());
                item
            }
        };

        self.recalculate_total();
        Some(item)
    }

    /// Sets the quantity of an existing line and reprices it with the
    /// current product snapshot. Returns `None` when the item is not in this bag.
    pub fn set_item_quantity(
        &mut self,
        item_id: Uuid,
        quantity: i32,
        product: Product,
    ) -> Option<BagItem> {
        let item = self.items.iter_mut().find(|item| item.id == item_id)?;
        item.product = product;
        item.quantity = quantity;
        item.calculate_total_price();
        let updated = item.clone();

        self.recalculate_total();
        Some(updated)
    }

    /// Removes an item, returning its last state.
    pub fn remove_item(&mut self, item_id: Uuid) -> Option<BagItem> {
        let index = self.items.iter().position(|item| item.id == item_id)?;
        let removed = self.items.remove(index);
        self.removed_item_ids.push(removed.id);

        self.recalculate_total();
        Some(removed)
    }

    pub fn recalculate_total(&mut self) {
        self.refresh_totals();
        self.updated_at = Utc::now();
    }

    fn refresh_totals(&mut self) {
        self.total_price = self
            .items
            .iter()
            .fold(BigDecimal::from(0), |acc, item| acc + &item.total_price);
        self.total_items = self
            .items
            .iter()
            .map(|item| i64::from(item.quantity))
            .sum();
    }
}
