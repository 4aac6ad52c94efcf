//! Translation of normalized filters and sorting into the store-agnostic
//! predicate tree and ordering.

use std::str::FromStr;

use super::dto::{
    FilterSpec, NormalizedFilters, NumberFilter, NumberOperator, QuickFilter, SortEntry,
    TextFilter, TextOperator,
};
use super::normalizer::parse_number;
use crate::model::common::SortDirection;
use crate::model::item::{ItemColumn, ItemFilterValue};
use crate::model::list_filter::{
    ComparisonType, ListFilterCondition, ListFilterValue, StringMatch, ValueComparison,
};
use crate::model::list_query::ListSorting;

pub type ItemCondition = ListFilterCondition<ItemFilterValue>;

#[derive(Clone, Debug, PartialEq)]
pub struct CompiledQuery {
    pub predicate: ItemCondition,
    pub sorting: ListSorting<ItemColumn>,
}

pub fn compile(filters: NormalizedFilters, sort: &[SortEntry]) -> CompiledQuery {
    CompiledQuery {
        predicate: compile_predicate(filters),
        sorting: compile_sorting(sort),
    }
}

/// `AND(per-column conditions) AND OR(quick filter group)`, collapsing
/// empty sides. Without any condition the result matches every row.
pub fn compile_predicate(filters: NormalizedFilters) -> ItemCondition {
    let NormalizedFilters { per_column, quick } = filters;

    let column_conditions = per_column
        .into_iter()
        .filter_map(|(column_id, filter)| column_condition(&column_id, filter));

    let per_column = ItemCondition::all(column_conditions);
    let quick = quick.map(quick_filter_group).unwrap_or_default();

    ItemCondition::all([per_column, quick])
}

fn column_condition(column_id: &str, filter: FilterSpec) -> Option<ItemCondition> {
    let Ok(column) = ItemColumn::from_str(column_id) else {
        tracing::debug!(column_id, "Dropping filter on unknown column");
        return None;
    };

    let condition = match filter {
        FilterSpec::Text(filter) => text_condition(column, filter),
        FilterSpec::Number(filter) => number_condition(column, filter),
    };

    if condition.is_none() {
        tracing::debug!(%column, "Dropping filter not applicable to column");
    }

    condition
}

fn text_condition(column: ItemColumn, filter: TextFilter) -> Option<ItemCondition> {
    let TextFilter { operator, value } = filter;

    let (string_match, negated) = match operator {
        TextOperator::Contains => (StringMatch::contains(value), false),
        TextOperator::NotContains => (StringMatch::contains(value), true),
        TextOperator::Equals => (StringMatch::equals(value), false),
        TextOperator::NotEqual => (StringMatch::equals(value), true),
        TextOperator::StartsWith => (StringMatch::starts_with(value), false),
        TextOperator::EndsWith => (StringMatch::ends_with(value), false),
    };

    let condition = column.text_filter(string_match)?.condition();
    Some(if negated { !condition } else { condition })
}

fn number_condition(column: ItemColumn, filter: NumberFilter) -> Option<ItemCondition> {
    let NumberFilter {
        operator,
        value,
        value_to,
    } = filter;

    let compare = |comparison, value| {
        column
            .number_filter(ValueComparison::new(comparison, value))
            .map(ListFilterValue::condition)
    };

    match operator {
        NumberOperator::Equals => compare(ComparisonType::Equal, value),
        NumberOperator::NotEqual => compare(ComparisonType::Equal, value).map(|c| !c),
        NumberOperator::GreaterThan => compare(ComparisonType::GreaterThan, value),
        NumberOperator::GreaterThanOrEqual => compare(ComparisonType::GreaterThanOrEqual, value),
        NumberOperator::LessThan => compare(ComparisonType::LessThan, value),
        NumberOperator::LessThanOrEqual => compare(ComparisonType::LessThanOrEqual, value),
        NumberOperator::InRange => {
            let lower = compare(ComparisonType::GreaterThanOrEqual, value)?;
            let upper = compare(ComparisonType::LessThanOrEqual, value_to?)?;
            Some(ItemCondition::all([lower, upper]))
        }
    }
}

fn quick_filter_group(quick: QuickFilter) -> ItemCondition {
    let text_conditions = ItemColumn::QUICK_FILTER_TEXT
        .into_iter()
        .filter_map(|column| column.text_filter(StringMatch::contains(quick.text.as_str())))
        .map(ListFilterValue::condition);

    let number_conditions = parse_number(&serde_json::Value::String(quick.text.to_owned()))
        .map(|number| {
            ItemColumn::QUICK_FILTER_NUMBER
                .into_iter()
                .filter_map(move |column| {
                    column.number_filter(ValueComparison::new(ComparisonType::Equal, number))
                })
                .map(ListFilterValue::condition)
        })
        .into_iter()
        .flatten();

    ItemCondition::any(text_conditions.chain(number_conditions))
}

/// Only the primary sort entry is honored; anything unusable falls back to
/// the natural column ascending
pub fn compile_sorting(sort: &[SortEntry]) -> ListSorting<ItemColumn> {
    let primary = sort.first().and_then(|entry| {
        match ItemColumn::from_str(&entry.column_id) {
            Ok(column) => Some(ListSorting {
                column,
                direction: Some(entry.direction),
            }),
            Err(_) => {
                tracing::debug!(column_id = %entry.column_id, "Ignoring sort on unknown column");
                None
            }
        }
    });

    primary.unwrap_or(ListSorting {
        column: ItemColumn::NATURAL,
        direction: Some(SortDirection::Ascending),
    })
}
