pub mod db;
pub mod local {
    pub mod record;
    pub mod repository;
    pub mod seed;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
