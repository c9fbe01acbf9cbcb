use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260301_000004_orders::Orders, m20260301_000005_seller_payout::SellerPayout};

static IDX_ORDERS_PAYOUT_ID: &str = "idx-orders-payout_id";
static FK_ORDERS_PAYOUT_ID: &str = "fk-orders-payout_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Orders::Table)
                    .add_column(integer_null(Orders::PayoutId))
                    .add_foreign_key(
                        TableForeignKey::new()
                            .name(FK_ORDERS_PAYOUT_ID)
                            .from_tbl(Orders::Table)
                            .from_col(Orders::PayoutId)
                            .to_tbl(SellerPayout::Table)
                            .to_col(SellerPayout::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ORDERS_PAYOUT_ID)
                    .table(Orders::Table)
                    .col(Orders::PayoutId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ORDERS_PAYOUT_ID)
                    .table(Orders::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Orders::Table)
                    .drop_foreign_key(FK_ORDERS_PAYOUT_ID)
                    .drop_column(Orders::PayoutId)
                    .to_owned(),
            )
            .await
    }
}
