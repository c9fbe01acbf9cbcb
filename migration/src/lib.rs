pub use sea_orm_migration::prelude::*;

mod m20260301_000001_account;
mod m20260301_000002_area_seller;
mod m20260301_000003_catalog;
mod m20260301_000004_orders;
mod m20260301_000005_seller_payout;
mod m20260301_000006_support;
mod m20260301_000007_otp_challenge;
mod m20260301_000008_order_payout;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_account::Migration),
            Box::new(m20260301_000002_area_seller::Migration),
            Box::new(m20260301_000003_catalog::Migration),
            Box::new(m20260301_000004_orders::Migration),
            Box::new(m20260301_000005_seller_payout::Migration),
            Box::new(m20260301_000006_support::Migration),
            Box::new(m20260301_000007_otp_challenge::Migration),
            Box::new(m20260301_000008_order_payout::Migration),
        ]
    }
}
