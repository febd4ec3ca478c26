use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::bag::use_cases::delete::{DeleteBagParams, DeleteBagUseCase};
use business::domain::bag::use_cases::get_all::GetAllBagsUseCase;
use business::domain::bag::use_cases::get_by_id::{GetBagByIdParams, GetBagByIdUseCase};
use business::domain::bag::use_cases::get_or_create::{
    GetOrCreateBagParams, GetOrCreateBagUseCase,
};
use business::domain::bag_item::use_cases::get_by_bag_id::{
    GetBagItemsByBagIdParams, GetBagItemsByBagIdUseCase,
};
use business::domain::shared::value_objects::UserName;

use crate::api::bag::dto::{BagResponse, CreateBagRequest, DeleteBagResponse};
use crate::api::bag_item::dto::BagItemResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_uuid};
use crate::api::tags::ApiTags;

pub struct BagApi {
    get_or_create_use_case: Arc<dyn GetOrCreateBagUseCase>,
    get_all_use_case: Arc<dyn GetAllBagsUseCase>,
    get_by_id_use_case: Arc<dyn GetBagByIdUseCase>,
    delete_use_case: Arc<dyn DeleteBagUseCase>,
    get_items_use_case: Arc<dyn GetBagItemsByBagIdUseCase>,
}

impl BagApi {
    pub fn new(
        get_or_create_use_case: Arc<dyn GetOrCreateBagUseCase>,
        get_all_use_case: Arc<dyn GetAllBagsUseCase>,
        get_by_id_use_case: Arc<dyn GetBagByIdUseCase>,
        delete_use_case: Arc<dyn DeleteBagUseCase>,
        get_items_use_case: Arc<dyn GetBagItemsByBagIdUseCase>,
    ) -> Self {
        Self {
            get_or_create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            delete_use_case,
            get_items_use_case,
        }
    }

    async fn bag_for_user(&self, user_name: String) -> GetBagResponse {
        let params = GetOrCreateBagParams {
            user_name: UserName::new(user_name),
        };

        match self.get_or_create_use_case.execute(params).await {
            Ok(bag) => GetBagResponse::Ok(Json(bag.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetBagResponse::NotFound(json),
                    _ => GetBagResponse::InternalError(json),
                }
            }
        }
    }
}

/// Shopping bag API
///
/// One bag per user, created lazily on first access.
#[OpenApi]
impl BagApi {
    /// Create or fetch a bag
    ///
    /// Returns the user's bag, creating an empty one if the user has none.
    #[oai(path = "/bags", method = "post", tag = "ApiTags::Bags")]
    async fn create(&self, body: Json<CreateBagRequest>) -> GetBagResponse {
        self.bag_for_user(body.0.user_name).await
    }

    /// List all bags
    #[oai(path = "/bags", method = "get", tag = "ApiTags::Bags")]
    async fn get_all(&self) -> GetAllBagsResponse {
        match self.get_all_use_case.execute().await {
            Ok(bags) => {
                let responses: Vec<BagResponse> = bags.into_iter().map(|b| b.into()).collect();
                GetAllBagsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllBagsResponse::InternalError(json)
            }
        }
    }

    /// Get a bag by id
    #[oai(path = "/bags/:id", method = "get", tag = "ApiTags::Bags")]
    async fn get_by_id(&self, id: Path<String>) -> GetBagResponse {
        let id = match parse_uuid(&id.0, "bag.invalid_id") {
            Ok(id) => id,
            Err(json) => return GetBagResponse::BadRequest(json),
        };

        match self.get_by_id_use_case.execute(GetBagByIdParams { id }).await {
            Ok(bag) => GetBagResponse::Ok(Json(bag.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetBagResponse::NotFound(json),
                    _ => GetBagResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a user's bag
    ///
    /// Same as create: the bag is created if the user does not have one yet.
    #[oai(path = "/bags/users/:user_name", method = "get", tag = "ApiTags::Bags")]
    async fn get_by_user_name(&self, user_name: Path<String>) -> GetBagResponse {
        self.bag_for_user(user_name.0).await
    }

    /// Delete a bag
    ///
    /// Removes the bag together with all of its items.
    #[oai(path = "/bags/:id", method = "delete", tag = "ApiTags::Bags")]
    async fn delete(&self, id: Path<String>) -> DeleteBagApiResponse {
        let id = match parse_uuid(&id.0, "bag.invalid_id") {
            Ok(id) => id,
            Err(json) => return DeleteBagApiResponse::BadRequest(json),
        };

        match self.delete_use_case.execute(DeleteBagParams { id }).await {
            Ok(message) => DeleteBagApiResponse::Ok(Json(DeleteBagResponse { message })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteBagApiResponse::NotFound(json),
                    _ => DeleteBagApiResponse::InternalError(json),
                }
            }
        }
    }

    /// List the items of a bag
    ///
    /// An unknown bag yields an empty list.
    #[oai(path = "/bags/:id/items", method = "get", tag = "ApiTags::Bags")]
    async fn get_items(&self, id: Path<String>) -> GetBagItemsResponse {
        let bag_id = match parse_uuid(&id.0, "bag.invalid_id") {
            Ok(id) => id,
            Err(json) => return GetBagItemsResponse::BadRequest(json),
        };

        match self
            .get_items_use_case
            .execute(GetBagItemsByBagIdParams { bag_id })
            .await
        {
            Ok(items) => {
                let responses: Vec<BagItemResponse> =
                    items.into_iter().map(|i| i.into()).collect();
                GetBagItemsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetBagItemsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetBagResponse {
    #[oai(status = 200)]
    Ok(Json<BagResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllBagsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<BagResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteBagApiResponse {
    #[oai(status = 200)]
    Ok(Json<DeleteBagResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetBagItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<BagItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
