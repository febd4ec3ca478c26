use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::bag_item::use_cases::add::{AddBagItemParams, AddBagItemUseCase};
use business::domain::bag_item::use_cases::delete::{DeleteBagItemParams, DeleteBagItemUseCase};
use business::domain::bag_item::use_cases::get_by_id::{
    GetBagItemByIdParams, GetBagItemByIdUseCase,
};
use business::domain::bag_item::use_cases::update_quantity::{
    UpdateBagItemQuantityParams, UpdateBagItemQuantityUseCase,
};
use business::domain::shared::value_objects::UserName;

use crate::api::bag_item::dto::{AddBagItemRequest, BagItemResponse, UpdateBagItemRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_uuid};
use crate::api::tags::ApiTags;

pub struct BagItemApi {
    add_use_case: Arc<dyn AddBagItemUseCase>,
    update_quantity_use_case: Arc<dyn UpdateBagItemQuantityUseCase>,
    get_by_id_use_case: Arc<dyn GetBagItemByIdUseCase>,
    delete_use_case: Arc<dyn DeleteBagItemUseCase>,
}

impl BagItemApi {
    pub fn new(
        add_use_case: Arc<dyn AddBagItemUseCase>,
        update_quantity_use_case: Arc<dyn UpdateBagItemQuantityUseCase>,
        get_by_id_use_case: Arc<dyn GetBagItemByIdUseCase>,
        delete_use_case: Arc<dyn DeleteBagItemUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            update_quantity_use_case,
            get_by_id_use_case,
            delete_use_case,
        }
    }
}

/// Bag item API
///
/// Adds, reprices and removes the lines of a user's bag. Every change
/// refreshes the owning bag's totals.
#[OpenApi]
impl BagItemApi {
    /// Add a product to a user's bag
    ///
    /// Creates the bag if needed. Adding a product already in the bag
    /// increases that line's quantity.
    #[oai(path = "/bag-items", method = "post", tag = "ApiTags::BagItems")]
    async fn add(&self, body: Json<AddBagItemRequest>) -> BagItemApiResponse {
        let request = body.0;
        let product_id = match parse_uuid(&request.product_id, "bag_item.invalid_product_id") {
            Ok(id) => id,
            Err(json) => return BagItemApiResponse::BadRequest(json),
        };
        let params = AddBagItemParams {
            user_name: UserName::new(request.user_name),
            product_id,
            quantity: request.quantity,
        };

        match self.add_use_case.execute(params).await {
            Ok(item) => BagItemApiResponse::Ok(Json(item.into())),
            Err(err) => BagItemApiResponse::from_error(err.into_error_response()),
        }
    }

    /// Update an item's quantity
    ///
    /// A quantity of zero or less removes the item; the response then holds
    /// the item as it was before removal.
    #[oai(path = "/bag-items/:id", method = "put", tag = "ApiTags::BagItems")]
    async fn update_quantity(
        &self,
        id: Path<String>,
        body: Json<UpdateBagItemRequest>,
    ) -> BagItemApiResponse {
        let id = match parse_uuid(&id.0, "bag_item.invalid_id") {
            Ok(id) => id,
            Err(json) => return BagItemApiResponse::BadRequest(json),
        };

        let params = UpdateBagItemQuantityParams {
            id,
            quantity: body.0.quantity,
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(item) => BagItemApiResponse::Ok(Json(item.into())),
            Err(err) => BagItemApiResponse::from_error(err.into_error_response()),
        }
    }

    /// Get a bag item by id
    #[oai(path = "/bag-items/:id", method = "get", tag = "ApiTags::BagItems")]
    async fn get_by_id(&self, id: Path<String>) -> BagItemApiResponse {
        let id = match parse_uuid(&id.0, "bag_item.invalid_id") {
            Ok(id) => id,
            Err(json) => return BagItemApiResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetBagItemByIdParams { id })
            .await
        {
            Ok(item) => BagItemApiResponse::Ok(Json(item.into())),
            Err(err) => BagItemApiResponse::from_error(err.into_error_response()),
        }
    }

    /// Delete a bag item
    ///
    /// Returns the removed item.
    #[oai(path = "/bag-items/:id", method = "delete", tag = "ApiTags::BagItems")]
    async fn delete(&self, id: Path<String>) -> BagItemApiResponse {
        let id = match parse_uuid(&id.0, "bag_item.invalid_id") {
            Ok(id) => id,
            Err(json) => return BagItemApiResponse::BadRequest(json),
        };

        match self.delete_use_case.execute(DeleteBagItemParams { id }).await {
            Ok(item) => BagItemApiResponse::Ok(Json(item.into())),
            Err(err) => BagItemApiResponse::from_error(err.into_error_response()),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum BagItemApiResponse {
    #[oai(status = 200)]
    Ok(Json<BagItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl BagItemApiResponse {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}
