use grid_core::model::item::{Item, ItemId};
use one_dto_mapper::Into;
use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Into)]
#[into(Item)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: ItemId,
    pub brand: Option<String>,
    pub code: Option<String>,
    pub core_material: Option<String>,
    pub finish: Option<String>,
    pub name: Option<String>,
    #[into(skip)]
    pub company_id: i64,
    #[into(skip)]
    pub custom: bool,
    #[into(skip)]
    pub created_date: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
