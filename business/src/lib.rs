pub mod application {
    pub mod bag {
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_or_create;
        pub mod manager;
    }
    pub mod bag_item {
        pub mod add;
        pub mod delete;
        pub mod get_by_bag_id;
        pub mod get_by_id;
        pub mod update_quantity;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod user {
        pub mod directory;
        pub mod model;
    }
    pub mod catalog {
        pub mod model;
        pub mod repository;
    }
    pub mod bag {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_or_create;
        }
    }
    pub mod bag_item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod delete;
            pub mod get_by_bag_id;
            pub mod get_by_id;
            pub mod update_quantity;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
