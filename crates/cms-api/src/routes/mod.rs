//! Route definitions
//!
//! Paths match what the admin panel and the public site already call:
//! reads of public content are open, every mutation needs a session.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{
    auth, dashboard, groups, health, home, pages, press, programs, schedule, upload, users,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .nest("/panel", panel_routes())
        .route("/upload", post(upload::upload_file))
}

/// Login and the current session
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/users/login", post(auth::login))
        .route("/users/me", get(auth::me))
}

fn panel_routes() -> Router<AppState> {
    Router::new()
        .nest("/pages", page_routes())
        .merge(settings_routes())
        .nest("/users", user_routes())
        .route("/dashboard", get(dashboard::get_dashboard))
}

/// Public site content
fn page_routes() -> Router<AppState> {
    Router::new()
        // Homepage
        .route("/home", get(home::get_home))
        .route("/home/update", put(home::update_home))
        .route("/home/trailer/delete/:id", delete(home::delete_trailer))
        .route("/home/episode/delete/:id", delete(home::delete_episode))
        // Programs
        .route("/programs", get(programs::list_programs))
        .route("/programs/update", put(programs::update_programs))
        .route("/programs/add", post(programs::add_program))
        .route("/programs/delete/:id", delete(programs::delete_program))
        .route("/programs/:id", get(programs::get_program))
        // Weekly schedule
        .route("/yayin-akisi", get(schedule::get_schedule))
        .route("/yayin-akisi/update", put(schedule::update_schedule))
        .route("/yayin-akisi/delete/:id", delete(schedule::delete_schedule_item))
        // Live stream
        .route("/canli-yayin", get(pages::get_live_stream))
        .route("/canli-yayin/update", put(pages::update_live_stream))
        // Media partners
        .route("/basin", get(press::list_media_partners))
        .route("/basin/update", put(press::update_media_partners))
        .route("/basin/add", post(press::add_media_partner))
        .route("/basin/delete/:id", delete(press::delete_media_partner))
        // Masthead
        .route("/kunye", get(pages::get_masthead))
        .route("/kunye/update", put(pages::update_masthead))
        // Contact
        .route("/contact", get(pages::get_contact_page))
        .route("/contact/update", put(pages::update_contact))
}

/// Site-wide settings
fn settings_routes() -> Router<AppState> {
    Router::new()
        .route("/settings/site", get(pages::get_contact_page))
        .route("/settings/site/update", put(pages::update_site_settings))
        .route("/settings/user/password/update", put(auth::change_password))
        .route("/socialmedia/update", put(pages::update_social_media))
}

/// Panel accounts and groups
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/list", get(users::list_users))
        .route("/list/add", post(users::add_user))
        .route("/list/update", put(users::update_user))
        .route("/list/delete/:id", delete(users::delete_user))
        .route("/groups", get(groups::list_groups))
        .route("/groups/add", post(groups::add_group))
        .route("/groups/update", put(groups::update_group))
        .route(
            "/groups/permissions/update",
            put(groups::update_group_permissions),
        )
}
