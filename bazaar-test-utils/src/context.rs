//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context includes an
//! in-memory SQLite database, a mock HTTP server standing in for the SMS gateway and an
//! in-memory session for exercising login flows.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};
use tower_sessions::{MemoryStore, Session};

use crate::{
    constant::{TEST_SMS_API_KEY, TEST_SMS_PATH},
    error::TestError,
};

/// Test context structure returned by `TestBuilder`
///
/// Provides access to the test environment including:
/// - Database connection
/// - Session backed by an in-memory store
/// - Mock SMS gateway server
/// - Collection of mock endpoints for assertion
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_user_tables().build().await?;
///
/// let (account, profile) = test.user().insert_user(TEST_PHONE, "Asha").await?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for test authentication flows
    pub session: Session,

    /// Mock HTTP server for the SMS gateway
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context with an empty database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            session,
            server,
            mocks: Vec::new(),
        })
    }

    /// Create database tables from schema statements.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    pub(crate) async fn with_indexes(
        &self,
        stmts: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// URL of the mock SMS gateway send endpoint
    pub fn sms_gateway_url(&self) -> String {
        format!("{}{}", self.server.url(), TEST_SMS_PATH)
    }

    /// API key the mock SMS gateway endpoints expect
    pub fn sms_api_key(&self) -> &'static str {
        TEST_SMS_API_KEY
    }

    /// Create a mock SMS gateway endpoint.
    ///
    /// The mock only matches requests carrying the test bearer key and verifies it was
    /// called exactly `expected_requests` times when [`Self::assert_mocks`] runs.
    ///
    /// # Arguments
    /// - `status` - HTTP status the gateway responds with
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_sms_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.server
            .mock("POST", TEST_SMS_PATH)
            .match_header("authorization", format!("Bearer {}", TEST_SMS_API_KEY).as_str())
            .match_header("content-type", "application/json")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(serde_json::json!({ "status": "queued" }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

/// Create a [`TestContext`] with the given entity tables and nothing else.
///
/// With no arguments the database is left empty, which is useful for asserting how code
/// behaves when the tables it needs are missing.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}
