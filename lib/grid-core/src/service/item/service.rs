use super::ItemService;
use super::compiler::compile;
use super::dto::{GetItemRowsRequestDTO, GetItemRowsResponseDTO};
use super::mapper::{create_list_response, scope_condition};
use super::normalizer::{normalize_filter_model, normalize_sort_model};
use super::pagination::{RowWindow, fetch_window, last_row};
use super::validator::validate_list_query;
use crate::model::item::{GetItemList, ItemListQuery};
use crate::service::error::ServiceError;

impl ItemService {
    /// Returns the rows of the requested grid window together with the index
    /// of the last row of the filtered result set
    ///
    /// # Arguments
    ///
    /// * `request` - window, sort model and filter model of the grid view.
    ///   Malformed sort or filter entries are ignored.
    pub async fn get_item_rows(
        &self,
        request: GetItemRowsRequestDTO,
    ) -> Result<GetItemRowsResponseDTO, ServiceError> {
        let GetItemRowsRequestDTO {
            start_row,
            end_row,
            sort_model,
            filter_model,
        } = request;

        let filters = normalize_filter_model(filter_model);
        let sort = normalize_sort_model(&sort_model);

        let mut query = compile(filters, &sort);
        query.predicate = scope_condition(&self.config.item) & query.predicate;

        let window = RowWindow::new(start_row, end_row);
        let rows = fetch_window(self.item_repository.as_ref(), &query, window).await?;
        let last_row = last_row(
            self.item_repository.as_ref(),
            &query.predicate,
            window,
            rows.len() as u64,
        )
        .await?;

        tracing::debug!(
            skip = window.skip,
            take = window.take,
            rows = rows.len(),
            last_row,
            "Fetched item rows"
        );

        Ok(GetItemRowsResponseDTO { rows, last_row })
    }

    /// Returns a page of items and the total item count
    ///
    /// # Arguments
    ///
    /// * `query` - page, sorting and filtering of the list
    pub async fn get_item_list(&self, query: ItemListQuery) -> Result<GetItemList, ServiceError> {
        validate_list_query(&query)?;

        let filtering = scope_condition(&self.config.item) & query.filtering;
        let page_size = query.pagination.map(|pagination| pagination.limit());

        let query = ItemListQuery {
            filtering: Some(filtering.to_owned()),
            ..query
        };

        let values = self.item_repository.find_items(&query).await?;
        let total_items = self.item_repository.count_items(&filtering).await?;

        Ok(create_list_response(
            values,
            page_size.unwrap_or(total_items),
            total_items,
        ))
    }
}
