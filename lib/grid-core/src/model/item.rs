use strum::{AsRefStr, Display, EnumString};

use super::common::GetListResponse;
use super::list_filter::{ListFilterValue, StringMatch, ValueComparison};
use super::list_query::ListQuery;

pub type ItemId = i64;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub brand: Option<String>,
    pub code: Option<String>,
    pub core_material: Option<String>,
    pub finish: Option<String>,
    pub name: Option<String>,
}

/// Grid columns, identified by the ids the client uses
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, AsRefStr, Display, EnumString)]
pub enum ItemColumn {
    #[strum(serialize = "nItemID")]
    Id,
    #[strum(serialize = "sBrand")]
    Brand,
    #[strum(serialize = "sCode")]
    Code,
    #[strum(serialize = "sCoreMaterial")]
    CoreMaterial,
    #[strum(serialize = "sFinish")]
    Finish,
    #[strum(serialize = "sName")]
    Name,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColumnKind {
    Text,
    Number,
}

impl ItemColumn {
    /// Column used when no (valid) sorting is requested and as the tie-breaker
    pub const NATURAL: ItemColumn = ItemColumn::Id;

    /// Columns searched with `contains` by the quick filter
    pub const QUICK_FILTER_TEXT: [ItemColumn; 5] = [
        ItemColumn::Brand,
        ItemColumn::Code,
        ItemColumn::CoreMaterial,
        ItemColumn::Finish,
        ItemColumn::Name,
    ];

    /// Columns compared with `equals` when the quick filter text is numeric
    pub const QUICK_FILTER_NUMBER: [ItemColumn; 1] = [ItemColumn::Id];

    pub fn kind(&self) -> ColumnKind {
        match self {
            Self::Id => ColumnKind::Number,
            Self::Brand | Self::Code | Self::CoreMaterial | Self::Finish | Self::Name => {
                ColumnKind::Text
            }
        }
    }

    /// Binds a string match to this column, `None` for non-text columns
    pub fn text_filter(self, value: StringMatch) -> Option<ItemFilterValue> {
        Some(match self {
            Self::Brand => ItemFilterValue::Brand(value),
            Self::Code => ItemFilterValue::Code(value),
            Self::CoreMaterial => ItemFilterValue::CoreMaterial(value),
            Self::Finish => ItemFilterValue::Finish(value),
            Self::Name => ItemFilterValue::Name(value),
            Self::Id => return None,
        })
    }

    /// Binds a numeric comparison to this column, `None` for non-number columns
    pub fn number_filter(self, value: ValueComparison<f64>) -> Option<ItemFilterValue> {
        match self {
            Self::Id => Some(ItemFilterValue::Id(value)),
            Self::Brand | Self::Code | Self::CoreMaterial | Self::Finish | Self::Name => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ItemFilterValue {
    Id(ValueComparison<f64>),
    Brand(StringMatch),
    Code(StringMatch),
    CoreMaterial(StringMatch),
    Finish(StringMatch),
    Name(StringMatch),
    CompanyId(i64),
    Custom(bool),
}

impl ListFilterValue for ItemFilterValue {}

pub type ItemListQuery = ListQuery<ItemColumn, ItemFilterValue>;

pub type GetItemList = GetListResponse<Item>;
