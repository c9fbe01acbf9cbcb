//! Declarative test builder.
//!
//! The builder pattern allows chaining multiple configuration methods together, with all
//! operations queued and executed during the final `build()` call.

use mockito::Mock;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    DbBackend, EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Table groups include the groups they depend on through foreign keys, so
/// `with_order_tables()` also creates the user, seller and catalog tables.
#[derive(Default)]
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,
    include_seller_tables: bool,
    include_catalog_tables: bool,
    include_order_tables: bool,
    include_support_tables: bool,
    include_otp_tables: bool,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    sms_endpoints: Vec<(usize, usize)>, // (status, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or mock endpoints configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add account, profile, user_role and address tables.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add area and seller tables along with the user tables.
    pub fn with_seller_tables(mut self) -> Self {
        self.include_seller_tables = true;
        self.with_user_tables()
    }

    /// Add category, product and seller listing tables along with the seller tables.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self.with_seller_tables()
    }

    /// Add payout, order, order item and order payment tables along with the catalog tables.
    pub fn with_order_tables(mut self) -> Self {
        self.include_order_tables = true;
        self.with_catalog_tables()
    }

    /// Add support ticket and callback request tables.
    pub fn with_support_tables(mut self) -> Self {
        self.include_support_tables = true;
        self
    }

    /// Add the OTP challenge table along with the user tables.
    pub fn with_otp_tables(mut self) -> Self {
        self.include_otp_tables = true;
        self.with_user_tables()
    }

    /// Add every table of the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_order_tables()
            .with_support_tables()
            .with_otp_tables()
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bazaar_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), bazaar_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Account)
    ///     .with_table(UserRole)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Add a mock SMS gateway endpoint.
    ///
    /// # Arguments
    /// - `status` - HTTP status the gateway responds with
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_sms_endpoint(mut self, status: usize, expected_requests: usize) -> Self {
        self.sms_endpoints.push((status, expected_requests));
        self
    }

    /// Add a custom mock endpoint to the test server.
    pub fn with_mock_endpoint<F>(mut self, builder: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(builder));
        self
    }

    /// Build the test context, creating tables and mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready to use test context
    /// - `Err(TestError::DbErr)` - Database connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables, parents before children
        let schema = Schema::new(DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_user_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Account),
                schema.create_table_from_entity(entity::prelude::Profile),
                schema.create_table_from_entity(entity::prelude::UserRole),
                schema.create_table_from_entity(entity::prelude::Address),
            ]);
        }

        if self.include_seller_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Area),
                schema.create_table_from_entity(entity::prelude::Seller),
            ]);
        }

        if self.include_catalog_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Category),
                schema.create_table_from_entity(entity::prelude::Product),
                schema.create_table_from_entity(entity::prelude::SellerSpecificPrice),
            ]);
        }

        if self.include_order_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::SellerPayout),
                schema.create_table_from_entity(entity::prelude::Orders),
                schema.create_table_from_entity(entity::prelude::OrderItem),
                schema.create_table_from_entity(entity::prelude::OrderPayment),
            ]);
        }

        if self.include_support_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::SupportTicket),
                schema.create_table_from_entity(entity::prelude::CallbackRequest),
            ]);
        }

        if self.include_otp_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::OtpChallenge));
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // Composite unique indexes the entities cannot express
        let mut indexes: Vec<IndexCreateStatement> = Vec::new();
        if self.include_catalog_tables {
            indexes.push(
                Index::create()
                    .name("idx-seller_specific_price-seller_id-product_id")
                    .table(entity::prelude::SellerSpecificPrice)
                    .col(entity::seller_specific_price::Column::SellerId)
                    .col(entity::seller_specific_price::Column::ProductId)
                    .unique()
                    .to_owned(),
            );
        }
        setup.with_indexes(indexes).await?;

        // 2. Create mock endpoints
        // Custom endpoints first so tests can queue an error response ahead of a success
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (status, expected) in self.sms_endpoints {
            mocks.push(setup.create_sms_endpoint(status, expected));
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}
