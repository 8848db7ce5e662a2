use axum::{Router, middleware};

use crate::logging::logging_middleware;
use crate::middleware::auth::{RequireAuth, require_auth};
use crate::middleware::cors::cors_layer;
use crate::modules::problems::router::{
    init_admin_problems_router, init_problem_detail_router, init_public_problems_router,
};
use crate::state::AppState;

/// Layer order, outermost first: logging, CORS, per-route auth, handler.
pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(init_public_problems_router())
        .merge(
            init_problem_detail_router().route_layer(middleware::from_fn_with_state(
                RequireAuth::user(&state.jwt_config),
                require_auth,
            )),
        )
        .merge(
            init_admin_problems_router().route_layer(middleware::from_fn_with_state(
                RequireAuth::admin(&state.jwt_config),
                require_auth,
            )),
        )
        .with_state(state.clone())
        .layer(cors_layer(&state.cors_config))
        .layer(middleware::from_fn(logging_middleware))
}
