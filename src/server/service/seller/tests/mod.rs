mod current_seller;

use bazaar_test_utils::prelude::*;

use super::*;
