//! Authentication error types.

use thiserror::Error;

/// Errors that can occur logging in against the hosted auth service,
/// classified into the categories the login form explains differently.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The request never reached the auth service (network failure,
    /// or something on the operator's machine blocking it).
    #[error("auth request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The account exists but its email was never confirmed.
    #[error("email not confirmed")]
    EmailNotConfirmed,

    /// Wrong email or password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The auth service rejected the login for another reason.
    #[error("login rejected: {0}")]
    Rejected(String),

    /// The auth service answered with something unparseable.
    #[error("malformed auth response: {0}")]
    MalformedResponse(String),
}

impl AuthError {
    /// The Spanish message shown to the operator for this category.
    #[must_use]
    pub fn operator_message(&self) -> String {
        match self {
            Self::Network(_) => "Error de conexión. Parece que una extensión (como AdBlock) está \
                                 bloqueando la solicitud. Por favor desactívala e intenta \
                                 nuevamente."
                .to_string(),
            Self::EmailNotConfirmed => "Tu email no ha sido confirmado. Revisa tu correo o \
                                        confirma manualmente el usuario en Supabase."
                .to_string(),
            Self::InvalidCredentials => {
                "Credenciales incorrectas. Verifica tu email y contraseña.".to_string()
            }
            Self::Rejected(message) | Self::MalformedResponse(message) => message.clone(),
        }
    }
}
