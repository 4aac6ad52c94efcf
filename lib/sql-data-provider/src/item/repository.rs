use autometrics::autometrics;
use grid_core::model::item::{Item, ItemColumn, ItemFilterValue, ItemListQuery};
use grid_core::model::list_filter::ListFilterCondition;
use grid_core::repository::error::DataLayerError;
use grid_core::repository::item_repository::ItemRepository;
use one_dto_mapper::convert_inner;
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder};

use super::ItemProvider;
use super::mapper::item_column;
use crate::entity::item;
use crate::list_query_generic::{SelectWithFilter, SelectWithListQuery};
use crate::mapper::to_data_layer_error;

#[autometrics]
#[async_trait::async_trait]
impl ItemRepository for ItemProvider {
    async fn find_items(&self, query: &ItemListQuery) -> Result<Vec<Item>, DataLayerError> {
        let mut select = item::Entity::find().with_list_query(query);

        // stable order across windows: ties fall back to the natural column
        let sorted_by_natural = query
            .sorting
            .as_ref()
            .is_some_and(|sorting| sorting.column == ItemColumn::NATURAL);
        if !sorted_by_natural {
            select = select.order_by_asc(item_column(ItemColumn::NATURAL));
        }

        let items = select
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(items))
    }

    async fn count_items(
        &self,
        filter: &ListFilterCondition<ItemFilterValue>,
    ) -> Result<u64, DataLayerError> {
        item::Entity::find()
            .with_filter(filter)
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)
    }
}
