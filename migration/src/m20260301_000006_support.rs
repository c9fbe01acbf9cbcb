use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SupportTicket::Table)
                    .if_not_exists()
                    .col(pk_auto(SupportTicket::Id))
                    .col(integer_null(SupportTicket::UserId))
                    .col(string(SupportTicket::Name))
                    .col(string(SupportTicket::Phone))
                    .col(integer_null(SupportTicket::OrderId))
                    .col(string(SupportTicket::IssueType))
                    .col(text(SupportTicket::Description))
                    .col(string_len(SupportTicket::Status, 16).default("open"))
                    .col(string_len(SupportTicket::Priority, 16).default("medium"))
                    .col(text_null(SupportTicket::AdminNotes))
                    .col(timestamp(SupportTicket::CreatedAt))
                    .col(timestamp(SupportTicket::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CallbackRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(CallbackRequest::Id))
                    .col(integer_null(CallbackRequest::UserId))
                    .col(string(CallbackRequest::Name))
                    .col(string(CallbackRequest::Phone))
                    .col(string(CallbackRequest::PreferredTime))
                    .col(string_len(CallbackRequest::Status, 16).default("pending"))
                    .col(text_null(CallbackRequest::AdminNotes))
                    .col(timestamp(CallbackRequest::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CallbackRequest::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SupportTicket::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SupportTicket {
    Table,
    Id,
    UserId,
    Name,
    Phone,
    OrderId,
    IssueType,
    Description,
    Status,
    Priority,
    AdminNotes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CallbackRequest {
    Table,
    Id,
    UserId,
    Name,
    Phone,
    PreferredTime,
    Status,
    AdminNotes,
    CreatedAt,
}
