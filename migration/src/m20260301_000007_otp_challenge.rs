use sea_orm_migration::{prelude::*, schema::*};

static IDX_OTP_CHALLENGE_PHONE: &str = "idx-otp_challenge-phone";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OtpChallenge::Table)
                    .if_not_exists()
                    .col(pk_auto(OtpChallenge::Id))
                    .col(string(OtpChallenge::Phone))
                    .col(string(OtpChallenge::CodeHash))
                    .col(integer(OtpChallenge::Attempts).default(0))
                    .col(timestamp(OtpChallenge::ExpiresAt))
                    .col(timestamp_null(OtpChallenge::ConsumedAt))
                    .col(timestamp(OtpChallenge::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OTP_CHALLENGE_PHONE)
                    .table(OtpChallenge::Table)
                    .col(OtpChallenge::Phone)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OTP_CHALLENGE_PHONE)
                    .table(OtpChallenge::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(OtpChallenge::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum OtpChallenge {
    Table,
    Id,
    Phone,
    CodeHash,
    Attempts,
    ExpiresAt,
    ConsumedAt,
    CreatedAt,
}
