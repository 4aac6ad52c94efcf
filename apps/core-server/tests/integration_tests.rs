mod fixtures;
mod utils;

// ITEM
#[path = "api/item/get_item_list_tests.rs"]
mod get_item_list_tests;
#[path = "api/item/get_item_rows_tests.rs"]
mod get_item_rows_tests;

// OTHER
#[path = "api/other/technical_endpoints_tests.rs"]
mod technical_endpoints_tests;
