pub mod legacy;
pub mod peer;

use std::sync::Once;

static TEST_LOGGING_INIT: Once = Once::new();

pub fn init_logger() {
    TEST_LOGGING_INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
