use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::bag::model::Bag;
use business::domain::bag_item::model::BagItem;
use business::domain::shared::value_objects::UserName;

use crate::bag_item::entity::BagItemEntity;

pub const BAG_COLUMNS: &str = "b.id, b.user_id, u.user_name, b.created_at, b.updated_at";

#[derive(Debug, FromRow)]
pub struct BagEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BagEntity {
    pub fn into_domain(self, items: Vec<BagItem>) -> Bag {
        Bag::from_repository(
            self.id,
            self.user_id,
            UserName::new(self.user_name),
            items,
            self.created_at,
            self.updated_at,
        )
    }
}

/// Attaches item rows to their bags, keeping the bag row order.
pub fn assemble_bags(bags: Vec<BagEntity>, items: Vec<BagItemEntity>) -> Vec<Bag> {
    let mut by_bag: HashMap<Uuid, Vec<BagItem>> = HashMap::new();
    for item in items {
        by_bag.entry(item.bag_id).or_default().push(item.into_domain());
    }

    bags.into_iter()
        .map(|bag| {
            let items = by_bag.remove(&bag.id).unwrap_or_default();
            bag.into_domain(items)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn bag_row(user_name: &str) -> BagEntity {
        BagEntity {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            user_name: user_name.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn item_row(bag_id: Uuid, price: &str, quantity: i32) -> BagItemEntity {
        let price = BigDecimal::from_str(price).unwrap();
        BagItemEntity {
            id: Uuid::new_v4(),
            bag_id,
            product_id: Uuid::new_v4(),
            product_name: "Scarf".to_string(),
            total_price: &price * BigDecimal::from(quantity),
            product_price: price,
            quantity,
        }
    }

    #[test]
    fn should_group_items_under_their_bag() {
        let alice = bag_row("alice");
        let bob = bag_row("bob");
        let items = vec![
            item_row(alice.id, "10.00", 2),
            item_row(bob.id, "3.00", 1),
            item_row(alice.id, "1.50", 4),
        ];

        let bags = assemble_bags(vec![alice, bob], items);

        assert_eq!(bags.len(), 2);
        assert_eq!(bags[0].user_name.as_str(), "alice");
        assert_eq!(bags[0].items().len(), 2);
        assert_eq!(bags[0].total_items(), 6);
        assert_eq!(bags[0].total_price(), &BigDecimal::from(26));
        assert_eq!(bags[1].items().len(), 1);
    }

    #[test]
    fn should_keep_bag_without_items() {
        let bags = assemble_bags(vec![bag_row("carol")], vec![]);

        assert_eq!(bags.len(), 1);
        assert!(bags[0].items().is_empty());
        assert_eq!(bags[0].total_price(), &BigDecimal::from(0));
    }

    #[test]
    fn should_price_line_from_stored_unit_price() {
        let bag = bag_row("alice");
        let row = item_row(bag.id, "7.25", 2);

        let item = row.into_domain();

        assert_eq!(item.price_per_item(), &BigDecimal::from_str("7.25").unwrap());
        assert_eq!(item.total_price, BigDecimal::from_str("14.50").unwrap());
        assert_eq!(
            item.price_per_item() * BigDecimal::from(item.quantity),
            item.total_price
        );
    }
}
