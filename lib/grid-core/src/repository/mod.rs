pub mod error;
pub mod item_repository;
