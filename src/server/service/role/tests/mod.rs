
use bazaar_test_utils::prelude::*;
use entity::sea_orm_active_enums::Role;

use super::*;
