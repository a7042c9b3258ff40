// ============================================================================
// ROUTER - Tabla de rutas de la app
// ============================================================================

use serde::{Deserialize, Serialize};
use yew_router::prelude::*;

use crate::components::route_guard::GuardKind;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    /// Kiosco de ingreso, sin sesión
    #[at("/check-in")]
    CheckIn,
    #[at("/admin/dashboard")]
    Dashboard,
    #[at("/admin/clientes")]
    Members,
    #[at("/admin/nuevo-cliente")]
    NewMember,
    #[at("/admin/editar/:id")]
    EditMember { id: String },
    #[at("/admin/historial")]
    History,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Guard que protege la ruta; `None` para rutas abiertas
    pub fn guard(&self) -> Option<GuardKind> {
        match self {
            Route::Login | Route::Register => Some(GuardKind::PublicOnly),
            Route::Dashboard
            | Route::Members
            | Route::NewMember
            | Route::EditMember { .. }
            | Route::History => Some(GuardKind::Protected),
            Route::Home | Route::CheckIn | Route::NotFound => None,
        }
    }
}

/// Query de `/login?aviso=...`: mensaje que otra pantalla deja para el login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoginQuery {
    #[serde(default)]
    pub aviso: Option<String>,
}

impl LoginQuery {
    pub fn with_notice(message: impl Into<String>) -> Self {
        Self { aviso: Some(message.into()) }
    }

    pub fn notice(&self) -> Option<&str> {
        self.aviso.as_deref().map(str::trim).filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_backoffice_urls() {
        assert_eq!(Route::Dashboard.to_path(), "/admin/dashboard");
        assert_eq!(Route::Members.to_path(), "/admin/clientes");
        assert_eq!(
            Route::EditMember { id: "65f1".into() }.to_path(),
            "/admin/editar/65f1"
        );
        assert_eq!(Route::CheckIn.to_path(), "/check-in");
    }

    #[test]
    fn guards_per_route() {
        assert_eq!(Route::Login.guard(), Some(GuardKind::PublicOnly));
        assert_eq!(Route::Register.guard(), Some(GuardKind::PublicOnly));
        assert_eq!(Route::History.guard(), Some(GuardKind::Protected));
        assert_eq!(Route::EditMember { id: "x".into() }.guard(), Some(GuardKind::Protected));
        assert_eq!(Route::CheckIn.guard(), None);
        assert_eq!(Route::NotFound.guard(), None);
    }

    #[test]
    fn login_query_ignores_blank_notice() {
        assert_eq!(LoginQuery::default().notice(), None);
        assert_eq!(LoginQuery::with_notice("  ").notice(), None);
        assert_eq!(
            LoginQuery::with_notice("Administrador registrado").notice(),
            Some("Administrador registrado")
        );
    }
}
