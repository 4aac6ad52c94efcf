use sea_orm_migration::prelude::*;

use crate::datatype::ColumnDefExt;

const INDEX_COMPANY_CUSTOM: &str = "index-Item-CompanyId-Custom";
const INDEX_NAME: &str = "index-Item-Name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .col(
                        ColumnDef::new(Item::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Item::Brand).string())
                    .col(ColumnDef::new(Item::Code).string())
                    .col(ColumnDef::new(Item::CoreMaterial).string())
                    .col(ColumnDef::new(Item::Finish).string())
                    .col(ColumnDef::new(Item::Name).string())
                    .col(ColumnDef::new(Item::CompanyId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Item::Custom)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Item::CreatedDate)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(INDEX_COMPANY_CUSTOM)
                    .table(Item::Table)
                    .col(Item::CompanyId)
                    .col(Item::Custom)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Item::Table)
                    .col(Item::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Item::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Item {
    Table,
    Id,
    Brand,
    Code,
    CoreMaterial,
    Finish,
    Name,
    CompanyId,
    Custom,
    CreatedDate,
}
