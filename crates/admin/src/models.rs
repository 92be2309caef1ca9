//! Session-backed models for the admin panel.

use serde::{Deserialize, Serialize};

/// Session keys for admin state.
pub mod session_keys {
    /// The logged-in operator.
    pub const CURRENT_ADMIN: &str = "current_admin";
}

/// The logged-in operator, as stored in the session.
///
/// Presence of this record *is* the session check: routes behind
/// [`crate::middleware::RequireAdminAuth`] only run when it is there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    pub email: String,
}
