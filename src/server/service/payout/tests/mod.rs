
use bazaar_test_utils::prelude::*;
use entity::sea_orm_active_enums::PayoutStatus;

use super::*;
