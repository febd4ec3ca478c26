use poem_openapi::Object;

use business::domain::bag::model::Bag;

use crate::api::bag_item::dto::{BagItemResponse, to_amount};

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateBagRequest {
    /// User whose bag is fetched or created
    pub user_name: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct BagResponse {
    /// Bag unique identifier
    pub id: String,
    /// Owner user name
    pub user_name: String,
    /// Sum of item quantities
    pub total_items: i64,
    /// Sum of item totals
    pub total_price: f64,
    /// Items currently in the bag
    pub items: Vec<BagItemResponse>,
}

impl From<Bag> for BagResponse {
    fn from(bag: Bag) -> Self {
        Self {
            id: bag.id.to_string(),
            user_name: bag.user_name.to_string(),
            total_items: bag.total_items(),
            total_price: to_amount(bag.total_price()),
            items: bag.items().iter().cloned().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct DeleteBagResponse {
    /// Confirmation message
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use business::domain::catalog::model::Product;
    use business::domain::shared::value_objects::UserName;
    use business::domain::user::model::User;
    use poem_openapi::types::ToJSON;
    use uuid::Uuid;

    fn bag_for(name: &str) -> Bag {
        Bag::new(&User::from_repository(Uuid::new_v4(), UserName::new(name)))
    }

    #[test]
    fn should_map_empty_bag() {
        let bag = bag_for("alice");
        let bag_id = bag.id;

        let response = BagResponse::from(bag);

        assert_eq!(response.id, bag_id.to_string());
        assert_eq!(response.user_name, "alice");
        assert_eq!(response.total_items, 0);
        assert_eq!(response.total_price, 0.0);
        assert!(response.items.is_empty());
    }

    #[test]
    fn should_map_items_and_totals() {
        let mut bag = bag_for("alice");
        let scarf =
            Product::from_repository(Uuid::new_v4(), "Scarf".to_string(), BigDecimal::from(10));
        bag.add_product(scarf.clone(), 2).unwrap();
        bag.add_product(scarf, 3).unwrap();

        let response = BagResponse::from(bag);

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity, 5);
        assert_eq!(response.total_items, 5);
        assert_eq!(response.total_price, 50.0);
    }

    #[test]
    fn should_serialize_in_camel_case() {
        let json = BagResponse::from(bag_for("bob")).to_json().unwrap();

        assert_eq!(json["userName"], serde_json::json!("bob"));
        assert_eq!(json["totalItems"], serde_json::json!(0));
        assert!(json["items"].as_array().unwrap().is_empty());
    }
}
