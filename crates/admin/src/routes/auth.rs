//! Authentication routes: login form, login action, logout.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::AdminError;
use crate::models::{CurrentAdmin, session_keys};
use crate::state::AppState;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    /// Category-specific message of a failed attempt.
    pub error: Option<String>,
    /// Echoed back so the operator only retypes the password.
    pub email: String,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Render the login form.
#[instrument(skip(session))]
pub async fn login_page(session: Session) -> impl IntoResponse {
    // Already logged in: straight to the dashboard.
    let logged_in = session
        .get::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await
        .ok()
        .flatten()
        .is_some();
    if logged_in {
        return Redirect::to("/").into_response();
    }

    LoginTemplate {
        error: None,
        email: String::new(),
    }
    .into_response()
}

/// Exchange the credentials against the hosted auth service.
///
/// A failed exchange re-renders the form with the message for its error
/// category; it never leaks which part of the credentials was wrong
/// beyond what the auth service itself says.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, AdminError> {
    match state.auth().login(&form.email, &form.password).await {
        Ok(admin) => {
            session
                .insert(session_keys::CURRENT_ADMIN, &admin)
                .await
                .map_err(|e| AdminError::Internal(format!("session write failed: {e}")))?;
            tracing::info!(email = %admin.email, "admin logged in");
            Ok(Redirect::to("/").into_response())
        }
        Err(e) => {
            tracing::warn!(error = %e, email = %form.email, "admin login failed");
            Ok(LoginTemplate {
                error: Some(e.operator_message()),
                email: form.email,
            }
            .into_response())
        }
    }
}

/// Clear the session and return to the login form.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Redirect {
    let _ = session
        .remove::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await;
    Redirect::to("/auth/login")
}
