pub mod api_client;
pub mod auth_service;

pub use api_client::ApiClient;
pub use auth_service::{login_admin, register_admin, validate_credentials};

use crate::error::AppError;
use crate::state::SessionStore;

/// Cierra la sesión si el backend rechazó el token. Devuelve `true` si hubo logout.
pub fn reconcile_session(session: &SessionStore, err: &AppError) -> bool {
    if err.is_unauthorized() && session.is_authenticated() {
        log::warn!("⚠️ [SESSION] Token rechazado por el backend, cerrando sesión");
        session.logout();
        true
    } else {
        false
    }
}
