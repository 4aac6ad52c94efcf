use grid_core::model::item::Item;
use one_dto_mapper::{From, Into};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::ListQueryParamsRest;

/// Grid view state of the requesting client
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetItemRowsRequestRestDTO {
    /// Index of the first requested row
    #[serde(default)]
    #[schema(example = 0)]
    pub start_row: i64,
    /// Index after the last requested row
    #[serde(default)]
    #[schema(example = 100)]
    pub end_row: i64,
    /// Ordered sort entries, `{ "colId": "sName", "sort": "asc" }`
    #[serde(default)]
    #[schema(value_type = Option<Vec<Object>>)]
    pub sort_model: Option<Value>,
    /// Column filters keyed by column id, plus the optional `quickFilter` text
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub filter_model: Option<Value>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetItemRowsResponseRestDTO {
    pub rows: Vec<ItemRowRestDTO>,
    /// Number of rows of the whole filtered result set
    pub last_row: u64,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(Item)]
pub(crate) struct ItemRowRestDTO {
    #[serde(rename = "nItemID")]
    pub id: i64,
    #[serde(rename = "sBrand")]
    pub brand: Option<String>,
    #[serde(rename = "sCode")]
    pub code: Option<String>,
    #[serde(rename = "sCoreMaterial")]
    pub core_material: Option<String>,
    #[serde(rename = "sFinish")]
    pub finish: Option<String>,
    #[serde(rename = "sName")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, ToSchema, Into)]
#[into("grid_core::model::item::ItemColumn")]
pub(crate) enum SortableItemColumnRestDTO {
    #[serde(rename = "nItemID")]
    Id,
    #[serde(rename = "sBrand")]
    Brand,
    #[serde(rename = "sCode")]
    Code,
    #[serde(rename = "sCoreMaterial")]
    CoreMaterial,
    #[serde(rename = "sFinish")]
    Finish,
    #[serde(rename = "sName")]
    Name,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemFilterQueryParamsRest {
    /// Return only items with a name starting with this string
    pub name: Option<String>,
}

pub(crate) type GetItemQuery = ListQueryParamsRest<ItemFilterQueryParamsRest, SortableItemColumnRestDTO>;
