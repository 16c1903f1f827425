#![allow(dead_code)]

use axum_test::TestServer;
use dev_utility_hub::application::services::Limits;
use dev_utility_hub::routes::build_router;
use dev_utility_hub::state::AppState;

pub const BASE_URL: &str = "http://localhost:3000";

pub fn create_test_state() -> AppState {
    AppState::in_memory(
        BASE_URL,
        Limits {
            bcrypt_cost: 4,
            ..Limits::default()
        },
    )
}

/// Full application router (API, pages, static files) over a fresh store.
pub fn create_test_server() -> TestServer {
    TestServer::new(build_router(create_test_state(), "static")).unwrap()
}
