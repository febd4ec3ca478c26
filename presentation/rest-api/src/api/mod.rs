pub mod error;
pub mod tags;

pub mod health {
    pub mod routes;
}
pub mod bag {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod bag_item {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
