mod api;

use crate::AppState;

use circle_config::Config;
use circle_db::Database;

pub(crate) const TEST_SECRET: &str = "unit-test-secret-at-least-32-chars!!";

pub(crate) async fn create_test_state() -> AppState {
    let pool = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let mut config = Config::default();
    config.auth.jwt_secret = Some(TEST_SECRET.to_string());
    config.auth.password_hash_memory_kib = 8;
    config.auth.password_hash_time_cost = 1;
    config.auth.password_hash_parallelism = 1;

    AppState::from_config(pool, &config).expect("Failed to build test state")
}
