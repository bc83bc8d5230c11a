use crate::auth::read_session;
use crate::server::router::FolioState;

use super::PageFlags;
use super::html::{error_banner, layout};
use axum::{
    Form,
    extract::{Query, State, rejection::FormRejection},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::PrivateCookieJar;
use chrono::Utc;
use folio_schema::LoginRequest;
use tracing::{error, warn};

const LOGIN_FAILED: &str = "/admin?error=1";

/// GET /admin
pub async fn login_page(jar: PrivateCookieJar, Query(flags): Query<PageFlags>) -> Response {
    if read_session(&jar, Utc::now()).is_ok() {
        return Redirect::to("/admin/dashboard").into_response();
    }

    let banner = if flags.has_error() {
        error_banner("Invalid email or password.")
    } else {
        String::new()
    };
    let body = format!(
        r#"<h1>Sign in</h1>
{banner}
<form method="post" action="/admin/login">
<p><label>Email <input type="email" name="email" required autocomplete="username"></label></p>
<p><label>Password <input type="password" name="password" required autocomplete="current-password"></label></p>
<p><button type="submit">Sign in</button></p>
</form>
<p><a href="/">Back to the portfolio</a></p>"#
    );
    layout("Sign in", &body).into_response()
}

/// POST /admin/login
pub async fn login_submit(
    State(state): State<FolioState>,
    jar: PrivateCookieJar,
    form: Result<Form<LoginRequest>, FormRejection>,
) -> Response {
    let Ok(Form(LoginRequest { email, password })) = form else {
        return Redirect::to(LOGIN_FAILED).into_response();
    };

    let user = match state.services.credentials.verify(&email, &password).await {
        Ok(user) => user,
        Err(e) if e.is_credential_failure() => {
            warn!(error = %e, "dashboard sign-in refused");
            return Redirect::to(LOGIN_FAILED).into_response();
        }
        Err(e) => {
            error!(error = %e, "dashboard sign-in failed");
            return Redirect::to(LOGIN_FAILED).into_response();
        }
    };

    match state.sign_in(jar, &user) {
        Ok(jar) => (jar, Redirect::to("/admin/dashboard")).into_response(),
        Err(e) => {
            error!(error = %e, "failed to issue session");
            Redirect::to(LOGIN_FAILED).into_response()
        }
    }
}

/// POST /admin/logout
pub async fn logout_submit(State(state): State<FolioState>, jar: PrivateCookieJar) -> Response {
    (state.sign_out(jar), Redirect::to("/admin")).into_response()
}
