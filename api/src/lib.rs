//! Launchpad API: a REST backend for a startup showcase.
//!
//! Startups are listed, submitted and ranked on a growth leaderboard; the
//! `/projects` endpoints serve the same rows reshaped into the view-model the
//! front-end renders.

pub mod config;
pub mod db;
pub mod domain;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use std::time::Duration;

use axum::routing::{get, post, put, Router};
use http::{header, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::{
    add_team_member, create_startup, create_user, delete_startup, get_dashboard, get_investors,
    get_leaderboard, get_project, get_projects, get_startup, get_startups, get_team, get_user,
    health_check, link_wallet, update_startup, AppState,
};

/// Builds the API router with CORS and request tracing
pub fn build_router(state: AppState) -> Router {
    // Configure CORS policy
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            header::AUTHORIZATION,
        ])
        .expose_headers([header::CONTENT_TYPE, header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health_check))
        .route("/startups", get(get_startups).post(create_startup))
        .route(
            "/startups/{id}",
            get(get_startup).put(update_startup).delete(delete_startup),
        )
        .route("/startups/{id}/team", get(get_team).post(add_team_member))
        .route("/leaderboard", get(get_leaderboard))
        .route("/projects", get(get_projects))
        .route("/projects/{id}", get(get_project))
        .route("/users", post(create_user))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/wallet", put(link_wallet))
        .route("/users/{id}/dashboard", get(get_dashboard))
        .route("/investors", get(get_investors))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
