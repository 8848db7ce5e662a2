use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_problem, get_problem, get_problems, only_get, only_post};

/// Routes open to anonymous callers.
pub fn init_public_problems_router() -> Router<AppState> {
    Router::new().route("/problems", get(get_problems).fallback(only_get))
}

/// Routes for any authenticated user.
pub fn init_problem_detail_router() -> Router<AppState> {
    Router::new().route("/problems/{id}", get(get_problem).fallback(only_get))
}

/// Routes for admins only. Handlers read the caller from `CurrentClaims`.
pub fn init_admin_problems_router() -> Router<AppState> {
    Router::new().route("/problems/create", post(create_problem).fallback(only_post))
}
