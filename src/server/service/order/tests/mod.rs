mod update_status;

use bazaar_test_utils::prelude::*;
use entity::sea_orm_active_enums::OrderStatus;

use super::*;
