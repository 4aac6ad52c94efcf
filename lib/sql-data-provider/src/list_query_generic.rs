use grid_core::model::list_filter::{
    ComparisonType, ListFilterCondition, ListFilterValue, StringMatch, StringMatchType,
    ValueComparison,
};
use grid_core::model::list_query::ListQuery;
use sea_orm::sea_query::{Expr, Func, IntoCondition, LikeExpr, SimpleExpr};
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, IntoSimpleExpr, QueryFilter, QueryOrder, QuerySelect,
    Select, Value,
};

use crate::mapper::order_from_sort_direction;

const LIKE_ESCAPE: char = '!';

pub trait IntoSortingColumn {
    /// converts declared sorting column into a sea-orm column
    fn get_column(&self) -> SimpleExpr;
}

pub trait IntoFilterCondition: Clone + ListFilterValue {
    /// converts single query field into a sea-orm condition
    fn get_condition(self) -> Condition;
}

pub trait SelectWithListQuery<SortableColumn, FilterValue>
where
    SortableColumn: IntoSortingColumn,
    FilterValue: IntoFilterCondition,
{
    /// applies all `query` declared constraits (filtering, sorting and pagination) on the query
    fn with_list_query(self, query: &ListQuery<SortableColumn, FilterValue>) -> Self;
}

impl<T, SortableColumn, FilterValue> SelectWithListQuery<SortableColumn, FilterValue> for Select<T>
where
    T: EntityTrait,
    SortableColumn: IntoSortingColumn,
    FilterValue: IntoFilterCondition,
{
    fn with_list_query(self, query: &ListQuery<SortableColumn, FilterValue>) -> Select<T> {
        let mut result = self;

        if let Some(filter) = &query.filtering {
            result = result.with_filter(filter);
        }

        if let Some(sorting) = &query.sorting {
            result = result.order_by(
                sorting.column.get_column(),
                order_from_sort_direction(sorting.direction.unwrap_or_default()),
            );
        }

        if let Some(pagination) = &query.pagination {
            result = result.offset(pagination.offset()).limit(pagination.limit());
        }

        result
    }
}

pub trait SelectWithFilter<FilterValue: IntoFilterCondition> {
    /// applies only the filtering part, used by count queries
    fn with_filter(self, filter: &ListFilterCondition<FilterValue>) -> Self;
}

impl<T, FilterValue> SelectWithFilter<FilterValue> for Select<T>
where
    T: EntityTrait,
    FilterValue: IntoFilterCondition,
{
    fn with_filter(self, filter: &ListFilterCondition<FilterValue>) -> Select<T> {
        if is_condition_empty(filter) {
            return self;
        }

        self.filter(get_filter_condition(filter))
    }
}

// helpers
fn get_filter_condition<FilterValue: IntoFilterCondition>(
    filter_condition: &ListFilterCondition<FilterValue>,
) -> Condition {
    match filter_condition {
        ListFilterCondition::And(conditions) => conditions
            .iter()
            .filter(|condition| !is_condition_empty(condition))
            .fold(Condition::all(), |result, condition| {
                result.add(get_filter_condition(condition))
            }),
        ListFilterCondition::Or(conditions) => conditions
            .iter()
            .filter(|condition| !is_condition_empty(condition))
            .fold(Condition::any(), |result, condition| {
                result.add(get_filter_condition(condition))
            }),
        // negation of "match everything" matches nothing
        ListFilterCondition::Not(inner) if is_condition_empty(inner) => {
            Condition::all().add(Expr::value(false))
        }
        ListFilterCondition::Not(inner) => get_filter_condition(inner).not(),
        ListFilterCondition::Value(value) => value.to_owned().get_condition(),
    }
}

fn is_condition_empty<FilterValue: IntoFilterCondition>(
    filter_condition: &ListFilterCondition<FilterValue>,
) -> bool {
    match filter_condition {
        ListFilterCondition::And(conditions) => conditions.iter().all(is_condition_empty),
        ListFilterCondition::Or(conditions) => {
            conditions.is_empty() || conditions.iter().any(is_condition_empty)
        }
        ListFilterCondition::Not(_) | ListFilterCondition::Value(_) => false,
    }
}

/// helper function to construct a `sea_query::Condition` from a `StringMatch`
///
/// All match types compare case-insensitively: both sides are lowercased, so
/// `equals` and the `LIKE` based matches agree on every backend.
/// `LIKE` wildcards inside the value are escaped, the match is always literal
pub(crate) fn get_string_match_condition(
    column: impl ColumnTrait,
    value: StringMatch,
) -> Condition {
    let StringMatch { r#match, value } = value;
    let value = value.to_lowercase();
    let lowered = Expr::expr(Func::lower(column.into_simple_expr()));

    let pattern = match r#match {
        StringMatchType::Equals => return lowered.eq(value).into_condition(),
        StringMatchType::StartsWith => format!("{}%", escape_like(&value)),
        StringMatchType::EndsWith => format!("%{}", escape_like(&value)),
        StringMatchType::Contains => format!("%{}%", escape_like(&value)),
    };

    lowered
        .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
        .into_condition()
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// helper function to construct an `eq` `sea_query::Condition` with a specific value
pub(crate) fn get_equals_condition(column: impl ColumnTrait, value: impl Into<Value>) -> Condition {
    column.eq(value).into_condition()
}

/// helper function to construct a comparison `sea_query::Condition` from a `ValueComparison`
pub(crate) fn get_comparison_condition<T: Into<Value>>(
    column: impl ColumnTrait,
    value: ValueComparison<T>,
) -> Condition {
    let ValueComparison { comparison, value } = value;

    match comparison {
        ComparisonType::Equal => column.eq(value),
        ComparisonType::LessThan => column.lt(value),
        ComparisonType::LessThanOrEqual => column.lte(value),
        ComparisonType::GreaterThan => column.gt(value),
        ComparisonType::GreaterThanOrEqual => column.gte(value),
    }
    .into_condition()
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("oak", "oak")]
    #[case("50%", "50!%")]
    #[case("a_b", "a!_b")]
    #[case("hi!", "hi!!")]
    #[case("c:\\dir", "c:\\dir")]
    fn test_escape_like(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(escape_like(value), expected);
    }
}
