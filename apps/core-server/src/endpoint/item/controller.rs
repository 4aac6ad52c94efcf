use axum::Json;
use axum::extract::State;
use axum_extra::extract::WithRejection;

use super::dto::{GetItemQuery, GetItemRowsRequestRestDTO, GetItemRowsResponseRestDTO};
use crate::dto::common::GetItemListResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::OkOrErrorResponse;
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/item/v1/rows",
    request_body(
        content = GetItemRowsRequestRestDTO,
        example = json!({
            "startRow": 0,
            "endRow": 100,
            "sortModel": [{ "colId": "sName", "sort": "asc" }],
            "filterModel": {
                "quickFilter": "oak",
                "nItemID": { "filterType": "number", "type": "inRange", "filter": 10, "filterTo": 20 }
            }
        }),
    ),
    responses(OkOrErrorResponse<GetItemRowsResponseRestDTO>),
    tag = "item",
    summary = "Retrieve grid rows",
    description = indoc::formatdoc! {"
        Returns the rows of the requested window of the filtered and sorted item
        list, together with the number of rows of the whole filtered result set.
        Unrecognized sort or filter entries are ignored.
    "},
)]
pub(crate) async fn post_item_rows(
    state: State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<GetItemRowsRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<GetItemRowsResponseRestDTO> {
    let result = state.core.item_service.get_item_rows(request.into()).await;
    OkOrErrorResponse::from_result(result, state, "getting item rows")
}

#[utoipa::path(
    get,
    path = "/api/item/v1",
    responses(OkOrErrorResponse<GetItemListResponseRestDTO>),
    params(GetItemQuery),
    tag = "item",
    summary = "List items",
    description = "Returns a page of items.",
)]
pub(crate) async fn get_item_list(
    state: State<AppState>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetItemQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetItemListResponseRestDTO> {
    let result = state.core.item_service.get_item_list(query.into()).await;
    OkOrErrorResponse::from_result(result, state, "listing items")
}
