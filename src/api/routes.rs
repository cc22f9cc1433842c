use axum::{
    routing::{get, post, put},
    Router,
};

use crate::api::handlers::{health, members, teams};
use crate::api::state::AppState;

/// Builds the application router
///
/// Middleware (tracing, CORS) is layered on by the binary.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Member routes
        .route(
            "/api/members",
            get(members::search_members).post(members::create_member),
        )
        .route("/api/members/page", get(members::search_members_page))
        .route("/api/members/:id", get(members::get_member))
        .route("/api/members/:id/team", put(members::change_member_team))
        // Team routes
        .route("/api/teams", post(teams::create_team))
        .route("/api/teams/:id", get(teams::get_team))
        .route("/api/teams/:id/members", get(teams::get_team_members))
        // Shared state
        .with_state(state)
}
