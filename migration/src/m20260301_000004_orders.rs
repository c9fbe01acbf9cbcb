use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260301_000001_account::Account, m20260301_000002_area_seller::Seller};

static IDX_ORDERS_SELLER_ID: &str = "idx-orders-seller_id";
static IDX_ORDERS_CREATED_AT: &str = "idx-orders-created_at";
static FK_ADDRESS_USER_ID: &str = "fk-address-user_id";
static FK_ORDERS_ADDRESS_ID: &str = "fk-orders-address_id";
static FK_ORDERS_SELLER_ID: &str = "fk-orders-seller_id";
static FK_ORDER_ITEM_ORDER_ID: &str = "fk-order_item-order_id";
static FK_ORDER_PAYMENT_ORDER_ID: &str = "fk-order_payment-order_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(pk_auto(Address::Id))
                    .col(integer(Address::UserId))
                    .col(string(Address::HouseNo))
                    .col(string_null(Address::Landmark))
                    .col(string(Address::Area))
                    .col(string(Address::Pincode))
                    .col(string_null(Address::Name))
                    .col(string_null(Address::Phone))
                    .col(boolean(Address::IsDefault).default(false))
                    .col(timestamp(Address::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ADDRESS_USER_ID)
                            .from(Address::Table, Address::UserId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::Id))
                    .col(string_uniq(Orders::OrderNumber))
                    .col(integer(Orders::UserId))
                    .col(integer_null(Orders::AddressId))
                    .col(integer_null(Orders::SellerId))
                    .col(integer_null(Orders::AreaId))
                    .col(string(Orders::DeliverySlot))
                    .col(string(Orders::PaymentMode))
                    .col(decimal_len(Orders::Subtotal, 12, 2))
                    .col(decimal_len(Orders::DeliveryFee, 12, 2).default(0))
                    .col(decimal_len(Orders::Total, 12, 2))
                    .col(string_len(Orders::Status, 16).default("confirmed"))
                    .col(decimal_len(Orders::SellerPriceAmount, 12, 2).default(0))
                    .col(decimal_len(Orders::CommissionAmount, 12, 2).default(0))
                    .col(decimal_len(Orders::TechFeeAmount, 12, 2).default(0))
                    .col(timestamp(Orders::CreatedAt))
                    .col(timestamp(Orders::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ORDERS_ADDRESS_ID)
                            .from(Orders::Table, Orders::AddressId)
                            .to(Address::Table, Address::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ORDERS_SELLER_ID)
                            .from(Orders::Table, Orders::SellerId)
                            .to(Seller::Table, Seller::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ORDERS_SELLER_ID)
                    .table(Orders::Table)
                    .col(Orders::SellerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ORDERS_CREATED_AT)
                    .table(Orders::Table)
                    .col(Orders::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OrderItem::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderItem::Id))
                    .col(integer(OrderItem::OrderId))
                    .col(integer_null(OrderItem::ProductId))
                    .col(string(OrderItem::ProductName))
                    .col(string_null(OrderItem::ProductImage))
                    .col(decimal_len(OrderItem::Price, 12, 2))
                    .col(integer(OrderItem::Quantity))
                    .col(timestamp(OrderItem::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ORDER_ITEM_ORDER_ID)
                            .from(OrderItem::Table, OrderItem::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OrderPayment::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderPayment::Id))
                    .col(integer(OrderPayment::OrderId))
                    .col(decimal_len(OrderPayment::Amount, 12, 2))
                    .col(string(OrderPayment::Mode))
                    .col(boolean(OrderPayment::Paid).default(false))
                    .col(timestamp(OrderPayment::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ORDER_PAYMENT_ORDER_ID)
                            .from(OrderPayment::Table, OrderPayment::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderPayment::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(OrderItem::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ORDERS_CREATED_AT)
                    .table(Orders::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ORDERS_SELLER_ID)
                    .table(Orders::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Address::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Address {
    Table,
    Id,
    UserId,
    HouseNo,
    Landmark,
    Area,
    Pincode,
    Name,
    Phone,
    IsDefault,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Orders {
    Table,
    Id,
    OrderNumber,
    UserId,
    AddressId,
    SellerId,
    AreaId,
    DeliverySlot,
    PaymentMode,
    Subtotal,
    DeliveryFee,
    Total,
    Status,
    SellerPriceAmount,
    CommissionAmount,
    TechFeeAmount,
    PayoutId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum OrderItem {
    Table,
    Id,
    OrderId,
    ProductId,
    ProductName,
    ProductImage,
    Price,
    Quantity,
    CreatedAt,
}

#[derive(DeriveIden)]
enum OrderPayment {
    Table,
    Id,
    OrderId,
    Amount,
    Mode,
    Paid,
    CreatedAt,
}
