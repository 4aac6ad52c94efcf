use std::fmt;

use grid_core::model::common::GetListResponse;
use grid_core::model::list_filter::{ListFilterCondition, ListFilterValue};
use grid_core::model::list_query::{ListPagination, ListQuery, ListSorting};
use one_dto_mapper::convert_inner;
use serde::{Deserialize, Serialize};
use utoipa::openapi::path::ParameterIn;
use utoipa::{IntoParams, ToSchema};

use super::common::{GetListResponseRestDTO, ListQueryParamsRest, SortDirection};

impl<T, K> From<GetListResponse<K>> for GetListResponseRestDTO<T>
where
    K: Into<T>,
    T: fmt::Debug + Serialize,
{
    fn from(value: GetListResponse<K>) -> Self {
        Self {
            values: convert_inner(value.values),
            total_pages: value.total_pages,
            total_items: value.total_items,
        }
    }
}

impl<FilterRest, SortableColumnRest, SortableColumn, Filter>
    From<ListQueryParamsRest<FilterRest, SortableColumnRest>> for ListQuery<SortableColumn, Filter>
where
    FilterRest: IntoParams + Into<ListFilterCondition<Filter>>,
    SortableColumnRest: ToSchema + Into<SortableColumn>,
    Filter: ListFilterValue,
{
    fn from(value: ListQueryParamsRest<FilterRest, SortableColumnRest>) -> Self {
        Self {
            pagination: Some(ListPagination::Page {
                page: value.page,
                page_size: value.page_size,
            }),
            sorting: value.sort.map(|column| ListSorting {
                column: column.into(),
                direction: value.sort_direction.map(Into::into),
            }),
            filtering: Some(value.filter.into()),
        }
    }
}

// Custom definition of IntoParams for the ListQueryParamsRest in order to flatten the filter params in swagger-ui
impl<Filter, SortColumn> IntoParams for ListQueryParamsRest<Filter, SortColumn>
where
    Filter: IntoParams,
    SortColumn: ToSchema,
{
    fn into_params(
        _parameter_in_provider: impl Fn() -> Option<ParameterIn>,
    ) -> Vec<utoipa::openapi::path::Parameter> {
        let mut params =
            PartialQueryParamsRest::<SortColumn>::into_params(|| Some(ParameterIn::Query));
        params.append(&mut Filter::into_params(|| Some(ParameterIn::Query)));
        params
    }
}

// only used for generation of swagger-ui params for pagination and sorting
#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct PartialQueryParamsRest<SortColumn: ToSchema> {
    /// Page number to retrieve, 0-based
    pub page: u32,
    /// Number of items per page, between 1 and 1000
    pub page_size: u32,

    #[param(inline)]
    pub sort: Option<SortColumn>,
    pub sort_direction: Option<SortDirection>,
}
