//! Validation of the untyped grid filter and sort models.
//!
//! Every entry is parsed into a closed [`FilterSpec`]. Entries that cannot be
//! parsed are dropped and logged, they never fail the request.

use std::str::FromStr;

use serde_json::{Map, Value};

use super::dto::{
    FilterSpec, NormalizedFilters, NumberFilter, NumberOperator, QuickFilter, SortEntry,
    TextFilter, TextOperator,
};
use crate::model::common::SortDirection;

pub const QUICK_FILTER_KEY: &str = "quickFilter";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum FilterKind {
    Text,
    Number,
}

pub fn normalize_filter_model(mut filter_model: Map<String, Value>) -> NormalizedFilters {
    let quick = filter_model
        .remove(QUICK_FILTER_KEY)
        .and_then(|value| normalize_quick_filter(&value));

    let per_column = filter_model
        .into_iter()
        .filter_map(|(column_id, entry)| {
            let filter = normalize_filter_entry(&entry);
            if filter.is_none() {
                tracing::debug!(%column_id, %entry, "Dropping malformed filter entry");
            }
            filter.map(|filter| (column_id, filter))
        })
        .collect();

    NormalizedFilters { per_column, quick }
}

pub fn normalize_quick_filter(value: &Value) -> Option<QuickFilter> {
    let text = match value {
        Value::String(text) => text.trim().to_owned(),
        Value::Number(number) => number.to_string(),
        Value::Null => return None,
        other => {
            tracing::debug!(value = %other, "Dropping malformed quick filter");
            return None;
        }
    };

    if text.is_empty() {
        return None;
    }

    Some(QuickFilter { text })
}

pub fn normalize_filter_entry(entry: &Value) -> Option<FilterSpec> {
    let entry = entry.as_object()?;

    let operator = entry
        .get("type")
        .or_else(|| entry.get("operator"))
        .and_then(Value::as_str)?;

    let kind = match entry.get("filterType") {
        Some(Value::String(filter_type)) => match filter_type.as_str() {
            "text" => FilterKind::Text,
            "number" => FilterKind::Number,
            other => {
                tracing::debug!(filter_type = other, "Unsupported filter type");
                return None;
            }
        },
        Some(Value::Null) | None => infer_kind(operator),
        Some(_) => return None,
    };

    match kind {
        FilterKind::Text => normalize_text_filter(operator, entry).map(FilterSpec::Text),
        FilterKind::Number => normalize_number_filter(operator, entry).map(FilterSpec::Number),
    }
}

// operators only meaningful for numbers; anything else is treated as text
fn infer_kind(operator: &str) -> FilterKind {
    match NumberOperator::from_str(operator) {
        Ok(
            NumberOperator::GreaterThan
            | NumberOperator::GreaterThanOrEqual
            | NumberOperator::LessThan
            | NumberOperator::LessThanOrEqual
            | NumberOperator::InRange,
        ) => FilterKind::Number,
        _ => FilterKind::Text,
    }
}

fn normalize_text_filter(operator: &str, entry: &Map<String, Value>) -> Option<TextFilter> {
    let Ok(operator) = TextOperator::from_str(operator) else {
        tracing::warn!(operator, "Unknown text filter operator");
        return None;
    };

    let value = match entry.get("filter")? {
        Value::String(value) => value.to_owned(),
        Value::Number(value) => value.to_string(),
        _ => return None,
    };

    Some(TextFilter { operator, value })
}

fn normalize_number_filter(operator: &str, entry: &Map<String, Value>) -> Option<NumberFilter> {
    let Ok(operator) = NumberOperator::from_str(operator) else {
        tracing::warn!(operator, "Unknown number filter operator");
        return None;
    };

    let value = entry.get("filter").and_then(parse_number)?;

    let value_to = match operator {
        NumberOperator::InRange => Some(entry.get("filterTo").and_then(parse_number)?),
        _ => None,
    };

    Some(NumberFilter {
        operator,
        value,
        value_to,
    })
}

/// Accepts JSON numbers and numeric strings, rejecting non-finite values
pub fn parse_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    number.is_finite().then_some(number)
}

pub fn normalize_sort_model(sort_model: &[Value]) -> Vec<SortEntry> {
    sort_model
        .iter()
        .filter_map(|entry| {
            let entry = entry.as_object()?;
            let column_id = entry.get("colId").and_then(Value::as_str)?.to_owned();
            let direction = entry
                .get("sort")
                .and_then(Value::as_str)
                .map(parse_sort_direction)
                .unwrap_or_default();

            Some(SortEntry {
                column_id,
                direction,
            })
        })
        .collect()
}

fn parse_sort_direction(value: &str) -> SortDirection {
    match value.trim().to_ascii_lowercase().as_str() {
        "desc" => SortDirection::Descending,
        "asc" => SortDirection::Ascending,
        other => {
            tracing::debug!(direction = other, "Unknown sort direction, using ascending");
            SortDirection::Ascending
        }
    }
}
