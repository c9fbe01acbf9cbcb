use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_account::Account;

static IDX_SELLER_AREA_ID: &str = "idx-seller-area_id";
static FK_SELLER_USER_ID: &str = "fk-seller-user_id";
static FK_SELLER_AREA_ID: &str = "fk-seller-area_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Area::Table)
                    .if_not_exists()
                    .col(pk_auto(Area::Id))
                    .col(string(Area::Name))
                    .col(string_null(Area::Pincode))
                    .col(boolean(Area::IsActive).default(true))
                    .col(timestamp(Area::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Seller::Table)
                    .if_not_exists()
                    .col(pk_auto(Seller::Id))
                    .col(integer_uniq(Seller::UserId))
                    .col(string(Seller::SellerName))
                    .col(integer_null(Seller::AreaId))
                    .col(decimal_len(Seller::CommissionPercentage, 5, 2).default(0))
                    .col(string_len(Seller::TechFeeType, 16).default("per_order"))
                    .col(decimal_len(Seller::TechFeeAmount, 12, 2).default(0))
                    .col(boolean(Seller::IsActive).default(false))
                    .col(timestamp(Seller::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SELLER_USER_ID)
                            .from(Seller::Table, Seller::UserId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SELLER_AREA_ID)
                            .from(Seller::Table, Seller::AreaId)
                            .to(Area::Table, Area::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SELLER_AREA_ID)
                    .table(Seller::Table)
                    .col(Seller::AreaId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SELLER_AREA_ID)
                    .table(Seller::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Seller::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Area::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Area {
    Table,
    Id,
    Name,
    Pincode,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Seller {
    Table,
    Id,
    UserId,
    SellerName,
    AreaId,
    CommissionPercentage,
    TechFeeType,
    TechFeeAmount,
    IsActive,
    CreatedAt,
}
