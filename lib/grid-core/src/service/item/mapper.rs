use crate::config::core_config::ItemConfig;
use crate::model::item::{GetItemList, Item, ItemFilterValue};
use crate::model::list_filter::{ListFilterCondition, ListFilterValue};

/// Rows visible to this deployment, AND-ed onto every grid predicate
pub(super) fn scope_condition(config: &ItemConfig) -> ListFilterCondition<ItemFilterValue> {
    let company = config
        .company_id
        .map(|company_id| ItemFilterValue::CompanyId(company_id).condition());

    let custom = (!config.include_custom).then(|| ItemFilterValue::Custom(false).condition());

    ListFilterCondition::all(company.into_iter().chain(custom))
}

pub(super) fn create_list_response(
    values: Vec<Item>,
    page_size: u64,
    total_items: u64,
) -> GetItemList {
    GetItemList {
        values,
        total_pages: calculate_pages_count(total_items, page_size),
        total_items,
    }
}

pub(super) fn calculate_pages_count(total_items_count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }

    (total_items_count / page_size) + std::cmp::min(total_items_count % page_size, 1)
}
