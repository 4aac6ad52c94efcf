use grid_core::model::common::SortDirection;
use grid_core::repository::error::DataLayerError;
use sea_orm::{DbErr, Order};

pub(crate) fn order_from_sort_direction(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Ascending => Order::Asc,
        SortDirection::Descending => Order::Desc,
    }
}

pub(crate) fn to_data_layer_error(e: DbErr) -> DataLayerError {
    DataLayerError::Db(e.into())
}
