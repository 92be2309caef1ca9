//! Authentication service.
//!
//! Sessions are established by exchanging email+password against the
//! hosted auth service's token endpoint. No credentials are stored or
//! hashed locally - a successful exchange is the whole proof, and the
//! operator lands in our own session cookie afterwards.

mod error;

pub use error::AuthError;

use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::instrument;

use crate::config::AdminBackendConfig;
use crate::models::CurrentAdmin;

/// Authentication service against the hosted auth endpoint.
pub struct AuthService {
    http: reqwest::Client,
    /// `{SUPABASE_URL}/auth/v1/token?grant_type=password`
    token_endpoint: String,
    api_key: String,
}

/// Successful token exchange (the fields we use of it).
#[derive(Debug, Deserialize)]
struct TokenResponse {
    user: AuthUser,
}

#[derive(Debug, Deserialize)]
struct AuthUser {
    email: Option<String>,
}

/// Error body of a rejected exchange. The service has shipped several
/// shapes over time; take whichever field is present.
#[derive(Debug, Default, Deserialize)]
struct AuthErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    error: Option<String>,
}

impl AuthService {
    /// Create a new auth service client.
    #[must_use]
    pub fn new(config: &AdminBackendConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            token_endpoint: format!("{}/auth/v1/token?grant_type=password", config.url),
            api_key: config.service_role_key.expose_secret().to_string(),
        }
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] classified per failure category:
    /// `Network` when the request never got through,
    /// `EmailNotConfirmed`/`InvalidCredentials` for the known rejections,
    /// `Rejected` with the raw detail otherwise.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<CurrentAdmin, AuthError> {
        let response = self
            .http
            .post(&self.token_endpoint)
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let detail: AuthErrorBody = serde_json::from_str(&body).unwrap_or_default();
            let message = detail
                .error_description
                .or(detail.msg)
                .or(detail.error)
                .unwrap_or_else(|| format!("login failed with status {status}"));
            return Err(classify_rejection(&message));
        }

        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

        Ok(CurrentAdmin {
            email: token.user.email.unwrap_or_else(|| email.to_string()),
        })
    }
}

/// Map the auth service's rejection message onto an error category.
fn classify_rejection(message: &str) -> AuthError {
    if message.contains("Email not confirmed") {
        AuthError::EmailNotConfirmed
    } else if message.contains("Invalid login credentials") {
        AuthError::InvalidCredentials
    } else {
        AuthError::Rejected(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_rejections_are_classified() {
        assert!(matches!(
            classify_rejection("Email not confirmed"),
            AuthError::EmailNotConfirmed
        ));
        assert!(matches!(
            classify_rejection("Invalid login credentials"),
            AuthError::InvalidCredentials
        ));
    }

    #[test]
    fn unknown_rejections_keep_their_detail() {
        let err = classify_rejection("User is banned");
        match err {
            AuthError::Rejected(message) => assert_eq!(message, "User is banned"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn operator_messages_are_specific_per_category() {
        assert!(
            AuthError::EmailNotConfirmed
                .operator_message()
                .contains("no ha sido confirmado")
        );
        assert!(
            AuthError::InvalidCredentials
                .operator_message()
                .contains("Credenciales incorrectas")
        );
        assert_eq!(
            AuthError::Rejected("User is banned".to_string()).operator_message(),
            "User is banned"
        );
    }
}
