pub mod db;
pub mod bag {
    pub mod entity;
    pub mod repository;
}
pub mod bag_item {
    pub mod entity;
    pub mod repository;
}
pub mod catalog {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
