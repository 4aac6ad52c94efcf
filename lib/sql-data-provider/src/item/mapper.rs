use grid_core::model::item::{ItemColumn, ItemFilterValue};
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{Condition, IntoSimpleExpr};

use crate::entity::item;
use crate::list_query_generic::{
    IntoFilterCondition, IntoSortingColumn, get_comparison_condition, get_equals_condition,
    get_string_match_condition,
};

impl IntoSortingColumn for ItemColumn {
    fn get_column(&self) -> SimpleExpr {
        item_column(*self).into_simple_expr()
    }
}

pub(super) fn item_column(column: ItemColumn) -> item::Column {
    match column {
        ItemColumn::Id => item::Column::Id,
        ItemColumn::Brand => item::Column::Brand,
        ItemColumn::Code => item::Column::Code,
        ItemColumn::CoreMaterial => item::Column::CoreMaterial,
        ItemColumn::Finish => item::Column::Finish,
        ItemColumn::Name => item::Column::Name,
    }
}

impl IntoFilterCondition for ItemFilterValue {
    fn get_condition(self) -> Condition {
        match self {
            Self::Id(comparison) => get_comparison_condition(item::Column::Id, comparison),
            Self::Brand(string_match) => {
                get_string_match_condition(item::Column::Brand, string_match)
            }
            Self::Code(string_match) => get_string_match_condition(item::Column::Code, string_match),
            Self::CoreMaterial(string_match) => {
                get_string_match_condition(item::Column::CoreMaterial, string_match)
            }
            Self::Finish(string_match) => {
                get_string_match_condition(item::Column::Finish, string_match)
            }
            Self::Name(string_match) => get_string_match_condition(item::Column::Name, string_match),
            Self::CompanyId(company_id) => get_equals_condition(item::Column::CompanyId, company_id),
            Self::Custom(custom) => get_equals_condition(item::Column::Custom, custom),
        }
    }
}
