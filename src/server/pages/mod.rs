//! Server-rendered HTML: the public portfolio page and the admin dashboard.

mod dashboard;
mod forms;
mod html;
mod login;
mod public;

use crate::server::router::FolioState;
use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;

/// Query flags shared by the admin pages (`?error=1`).
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageFlags {
    #[serde(default)]
    pub error: Option<String>,
}

impl PageFlags {
    pub fn has_error(&self) -> bool {
        self.error.as_deref().is_some_and(|v| !v.is_empty() && v != "0")
    }
}

/// Pages reachable without a session.
pub fn public_router() -> Router<FolioState> {
    Router::new()
        .route("/", get(public::portfolio_page))
        .route("/admin", get(login::login_page))
        .route("/admin/login", post(login::login_submit))
        .route("/admin/logout", post(login::logout_submit))
}

/// Dashboard and its form targets; the caller layers the session guard on top.
pub fn admin_router() -> Router<FolioState> {
    Router::new()
        .route("/admin/dashboard", get(dashboard::dashboard_page))
        .route("/admin/experiences", post(forms::create_experience))
        .route("/admin/experiences/{id}", post(forms::update_experience))
        .route(
            "/admin/experiences/{id}/delete",
            post(forms::delete_experience),
        )
        .route("/admin/skills", post(forms::create_skill))
        .route("/admin/skills/{id}", post(forms::update_skill))
        .route("/admin/skills/{id}/delete", post(forms::delete_skill))
        .route("/admin/about", post(forms::save_about))
}
