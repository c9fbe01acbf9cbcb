use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000002_area_seller::Seller;

static IDX_SELLER_PRICE_SELLER_PRODUCT: &str = "idx-seller_specific_price-seller_id-product_id";
static FK_SELLER_PRICE_SELLER_ID: &str = "fk-seller_specific_price-seller_id";
static FK_SELLER_PRICE_PRODUCT_ID: &str = "fk-seller_specific_price-product_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(pk_auto(Category::Id))
                    .col(string(Category::Name))
                    .col(string_uniq(Category::Slug))
                    .col(string_null(Category::ImageUrl))
                    .col(timestamp(Category::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(string(Product::Name))
                    .col(string(Product::Unit))
                    .col(string_null(Product::ImageUrl))
                    .col(string(Product::Categories).default(""))
                    .col(text_null(Product::Description))
                    .col(string_null(Product::Brand))
                    .col(boolean(Product::InStock).default(true))
                    .col(decimal_len_null(Product::PriceMrp, 12, 2))
                    .col(decimal_len_null(Product::PriceSelling, 12, 2))
                    .col(integer_null(Product::Stock))
                    .col(boolean(Product::IsSellerEditable).default(false))
                    .col(timestamp(Product::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SellerSpecificPrice::Table)
                    .if_not_exists()
                    .col(pk_auto(SellerSpecificPrice::Id))
                    .col(integer(SellerSpecificPrice::SellerId))
                    .col(integer(SellerSpecificPrice::ProductId))
                    .col(decimal_len(SellerSpecificPrice::Price, 12, 2))
                    .col(timestamp(SellerSpecificPrice::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SELLER_PRICE_SELLER_ID)
                            .from(SellerSpecificPrice::Table, SellerSpecificPrice::SellerId)
                            .to(Seller::Table, Seller::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SELLER_PRICE_PRODUCT_ID)
                            .from(SellerSpecificPrice::Table, SellerSpecificPrice::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SELLER_PRICE_SELLER_PRODUCT)
                    .table(SellerSpecificPrice::Table)
                    .col(SellerSpecificPrice::SellerId)
                    .col(SellerSpecificPrice::ProductId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SELLER_PRICE_SELLER_PRODUCT)
                    .table(SellerSpecificPrice::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SellerSpecificPrice::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Category {
    Table,
    Id,
    Name,
    Slug,
    ImageUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Product {
    Table,
    Id,
    Name,
    Unit,
    ImageUrl,
    Categories,
    Description,
    Brand,
    InStock,
    PriceMrp,
    PriceSelling,
    Stock,
    IsSellerEditable,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SellerSpecificPrice {
    Table,
    Id,
    SellerId,
    ProductId,
    Price,
    UpdatedAt,
}
