use super::compiler::{CompiledQuery, ItemCondition};
use crate::model::item::{Item, ItemListQuery};
use crate::model::list_query::ListPagination;
use crate::repository::error::DataLayerError;
use crate::repository::item_repository::ItemRepository;

/// Requested `[start_row, end_row)` slice of the full result set.
/// Negative or inverted bounds produce an empty window.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct RowWindow {
    pub skip: u64,
    pub take: u64,
}

impl RowWindow {
    pub fn new(start_row: i64, end_row: i64) -> Self {
        if start_row < 0 || end_row < 0 {
            tracing::debug!(start_row, end_row, "Negative row window, treating as empty");
            return Self {
                skip: start_row.max(0) as u64,
                take: 0,
            };
        }

        Self {
            skip: start_row as u64,
            take: end_row.saturating_sub(start_row).max(0) as u64,
        }
    }
}

/// Bounded read of the rows inside `window`
pub(crate) async fn fetch_window(
    repository: &dyn ItemRepository,
    query: &CompiledQuery,
    window: RowWindow,
) -> Result<Vec<Item>, DataLayerError> {
    if window.take == 0 {
        return Ok(vec![]);
    }

    let list_query = ItemListQuery {
        pagination: Some(ListPagination::Window {
            skip: window.skip,
            take: window.take,
        }),
        sorting: Some(query.sorting.to_owned()),
        filtering: Some(query.predicate.to_owned()),
    };

    repository.find_items(&list_query).await
}

/// Index of the last row of the filtered result set.
///
/// A window that came back short proves there are no further rows, so the
/// boundary follows from its size. Only a full window pays for a count query.
pub(crate) async fn last_row(
    repository: &dyn ItemRepository,
    predicate: &ItemCondition,
    window: RowWindow,
    rows_returned: u64,
) -> Result<u64, DataLayerError> {
    if rows_returned < window.take {
        return Ok(window.skip + rows_returned);
    }

    repository.count_items(predicate).await
}
