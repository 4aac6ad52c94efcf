use super::error::DataLayerError;
use crate::model::item::{Item, ItemFilterValue, ItemListQuery};
use crate::model::list_filter::ListFilterCondition;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ItemRepository: Send + Sync {
    /// Returns the rows selected by the filtering, in the requested order,
    /// restricted to the pagination window
    async fn find_items(&self, query: &ItemListQuery) -> Result<Vec<Item>, DataLayerError>;

    /// Returns the number of rows matching `filter`
    async fn count_items(
        &self,
        filter: &ListFilterCondition<ItemFilterValue>,
    ) -> Result<u64, DataLayerError>;
}
