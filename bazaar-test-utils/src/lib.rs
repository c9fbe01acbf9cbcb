pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_PHONE, TEST_SELLER_PHONE, TEST_SMS_API_KEY},
        test_setup_with_tables, TestBuilder, TestContext, TestError,
    };
}
