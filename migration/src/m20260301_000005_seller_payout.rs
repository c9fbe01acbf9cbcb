use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000002_area_seller::Seller;

static FK_SELLER_PAYOUT_SELLER_ID: &str = "fk-seller_payout-seller_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SellerPayout::Table)
                    .if_not_exists()
                    .col(pk_auto(SellerPayout::Id))
                    .col(integer(SellerPayout::SellerId))
                    .col(decimal_len(SellerPayout::TotalOrderAmount, 12, 2))
                    .col(decimal_len(SellerPayout::TotalCommissionAmount, 12, 2))
                    .col(decimal_len(SellerPayout::TotalTechFeeAmount, 12, 2))
                    .col(decimal_len(SellerPayout::FinalPayoutAmount, 12, 2))
                    .col(string_len(SellerPayout::PayoutStatus, 16).default("pending"))
                    .col(timestamp_null(SellerPayout::ReleasedAt))
                    .col(timestamp(SellerPayout::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SELLER_PAYOUT_SELLER_ID)
                            .from(SellerPayout::Table, SellerPayout::SellerId)
                            .to(Seller::Table, Seller::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SellerPayout::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SellerPayout {
    Table,
    Id,
    SellerId,
    TotalOrderAmount,
    TotalCommissionAmount,
    TotalTechFeeAmount,
    FinalPayoutAmount,
    PayoutStatus,
    ReleasedAt,
    CreatedAt,
}
