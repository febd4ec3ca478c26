use std::sync::Arc;

use logger::TracingLogger;
use persistence::bag::repository::BagRepositoryPostgres;
use persistence::bag_item::repository::BagItemRepositoryPostgres;
use persistence::catalog::repository::ProductCatalogPostgres;
use persistence::user::repository::UserDirectoryPostgres;

use business::application::bag::delete::DeleteBagUseCaseImpl;
use business::application::bag::get_all::GetAllBagsUseCaseImpl;
use business::application::bag::get_by_id::GetBagByIdUseCaseImpl;
use business::application::bag::get_or_create::GetOrCreateBagUseCaseImpl;
use business::application::bag::manager::BagManagerImpl;
use business::application::bag_item::add::AddBagItemUseCaseImpl;
use business::application::bag_item::delete::DeleteBagItemUseCaseImpl;
use business::application::bag_item::get_by_bag_id::GetBagItemsByBagIdUseCaseImpl;
use business::application::bag_item::get_by_id::GetBagItemByIdUseCaseImpl;
use business::application::bag_item::update_quantity::UpdateBagItemQuantityUseCaseImpl;

use crate::api::bag::routes::BagApi;
use crate::api::bag_item::routes::BagItemApi;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub bag_api: BagApi,
    pub bag_item_api: BagItemApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let bag_repository = Arc::new(BagRepositoryPostgres::new(pool.clone()));
        let bag_item_repository = Arc::new(BagItemRepositoryPostgres::new(pool.clone()));
        let product_catalog = Arc::new(ProductCatalogPostgres::new(pool.clone()));
        let user_directory = Arc::new(UserDirectoryPostgres::new(pool));

        // Domain services
        let bag_manager = Arc::new(BagManagerImpl {
            repository: bag_repository.clone(),
            user_directory,
            logger: logger.clone(),
        });

        // Bag use cases
        let get_or_create_use_case = Arc::new(GetOrCreateBagUseCaseImpl {
            bag_manager: bag_manager.clone(),
            logger: logger.clone(),
        });
        let get_all_bags_use_case = Arc::new(GetAllBagsUseCaseImpl {
            repository: bag_repository.clone(),
            logger: logger.clone(),
        });
        let get_bag_by_id_use_case = Arc::new(GetBagByIdUseCaseImpl {
            bag_manager: bag_manager.clone(),
            logger: logger.clone(),
        });
        let delete_bag_use_case = Arc::new(DeleteBagUseCaseImpl {
            repository: bag_repository,
            logger: logger.clone(),
        });

        // Bag item use cases
        let add_item_use_case = Arc::new(AddBagItemUseCaseImpl {
            bag_manager: bag_manager.clone(),
            product_catalog: product_catalog.clone(),
            logger: logger.clone(),
        });
        let delete_item_use_case = Arc::new(DeleteBagItemUseCaseImpl {
            repository: bag_item_repository.clone(),
            bag_manager: bag_manager.clone(),
            logger: logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateBagItemQuantityUseCaseImpl {
            repository: bag_item_repository.clone(),
            bag_manager,
            product_catalog,
            logger: logger.clone(),
        });
        let get_item_by_id_use_case = Arc::new(GetBagItemByIdUseCaseImpl {
            repository: bag_item_repository.clone(),
            logger: logger.clone(),
        });
        let get_items_by_bag_use_case = Arc::new(GetBagItemsByBagIdUseCaseImpl {
            repository: bag_item_repository,
            logger,
        });

        let bag_api = BagApi::new(
            get_or_create_use_case,
            get_all_bags_use_case,
            get_bag_by_id_use_case,
            delete_bag_use_case,
            get_items_by_bag_use_case,
        );

        let bag_item_api = BagItemApi::new(
            add_item_use_case,
            update_quantity_use_case,
            get_item_by_id_use_case,
            delete_item_use_case,
        );

        Self {
            health_api,
            bag_api,
            bag_item_api,
        }
    }
}
