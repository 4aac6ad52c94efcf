use crate::model::item::ItemListQuery;
use crate::model::list_query::ListPagination;
use crate::service::error::ValidationError;

pub const MAX_PAGE_SIZE: u32 = 1000;

pub(super) fn validate_list_query(query: &ItemListQuery) -> Result<(), ValidationError> {
    if let Some(ListPagination::Page { page_size, .. }) = query.pagination {
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(ValidationError::InvalidPageSize(page_size));
        }
    }

    Ok(())
}
