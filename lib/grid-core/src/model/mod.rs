pub mod common;
pub mod item;
pub mod list_filter;
pub mod list_query;
