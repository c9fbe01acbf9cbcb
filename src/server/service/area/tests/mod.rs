
use bazaar_test_utils::prelude::*;

use super::*;
