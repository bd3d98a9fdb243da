
use wayfarer_test_utils::prelude::*;
