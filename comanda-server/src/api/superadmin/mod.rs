//! Superadmin API module

mod handler;

use axum::{
    Router,
    routing::get,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/superadmin", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/organizations",
            get(handler::list_organizations).post(handler::create_organization),
        )
        .route(
            "/organizations/{id}",
            get(handler::get_organization)
                .patch(handler::update_organization)
                .delete(handler::delete_organization),
        )
        .route("/audit-logs", get(handler::audit_logs))
}
