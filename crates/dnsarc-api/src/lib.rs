#![allow(non_snake_case)]

pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;

use axum::Router;

pub use session::SessionCookie;
pub use state::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes(state.clone()))
        .with_state(state)
}
