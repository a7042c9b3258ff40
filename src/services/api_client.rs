// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP
// ============================================================================
// Sin lógica de negocio. El token se lee de la sesión en cada request, así
// un login/logout se aplica al request siguiente.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::{
    AccessLogEntry, Ack, CheckInResult, Credentials, DashboardStats, LoginResponse, Member,
    MemberDraft, RenewalRequest, RenewalResponse,
};
use crate::state::SessionStore;
use crate::utils::AUTH_HEADER;

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(session: SessionStore) -> Self {
        Self::with_base_url(CONFIG.backend_url(), session)
    }

    pub fn with_base_url(base_url: &str, session: SessionStore) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Header de auth a enviar, si hay sesión
    pub fn auth_header(&self) -> Option<(&'static str, String)> {
        self.session.token().map(|token| (AUTH_HEADER, token))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.auth_header() {
            Some((name, token)) => builder.header(name, &token),
            None => builder,
        }
    }

    async fn send(&self, request: Result<Request, gloo_net::Error>, label: &str) -> Result<gloo_net::http::Response, AppError> {
        let request = request.map_err(|e| AppError::Network(format!("Error armando request: {}", e)))?;
        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let err = AppError::from_response(status, &body);
            log::error!("❌ [API] {} -> HTTP {}: {}", label, status, err);
            return Err(err);
        }
        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: Result<Request, gloo_net::Error>,
        label: &str,
    ) -> Result<T, AppError> {
        let response = self.send(request, label).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Parse(format!("{}: {}", label, e)))
    }

    /// Para endpoints que responden `{ msg }`, otro JSON o nada
    async fn fetch_ack(&self, request: Result<Request, gloo_net::Error>, label: &str) -> Result<Ack, AppError> {
        let response = self.send(request, label).await?;
        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str::<Ack>(&body).unwrap_or_default())
    }

    // ------------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------------

    /// Errores 4xx del login se reportan como credenciales inválidas
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AppError> {
        log::info!("🔐 [API] Login: {}", credentials.usuario);
        let request = Request::post(&self.endpoint("/auth/login")).json(credentials);
        self.fetch_json(request, "login").await.map_err(|e| match e {
            AppError::Remote { status, message } if (400..500).contains(&status) => {
                AppError::Unauthorized(message)
            }
            other => other,
        })
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<Ack, AppError> {
        log::info!("📝 [API] Registro de admin: {}", credentials.usuario);
        let request = Request::post(&self.endpoint("/auth/register")).json(credentials);
        self.fetch_ack(request, "register").await
    }

    // ------------------------------------------------------------------------
    // Socios
    // ------------------------------------------------------------------------

    pub async fn list_members(&self) -> Result<Vec<Member>, AppError> {
        let request = self.authorized(Request::get(&self.endpoint("/clients"))).build();
        let members: Vec<Member> = self.fetch_json(request, "list_members").await?;
        log::info!("✅ [API] {} socios obtenidos", members.len());
        Ok(members)
    }

    pub async fn get_member(&self, id: &str) -> Result<Member, AppError> {
        let url = self.endpoint(&format!("/clients/{}", id));
        let request = self.authorized(Request::get(&url)).build();
        self.fetch_json(request, "get_member").await
    }

    pub async fn create_member(&self, draft: &MemberDraft) -> Result<Ack, AppError> {
        log::info!("➕ [API] Alta de socio: {}", draft.dni);
        let request = self.authorized(Request::post(&self.endpoint("/clients"))).json(draft);
        self.fetch_ack(request, "create_member").await
    }

    pub async fn update_member(&self, id: &str, draft: &MemberDraft) -> Result<Ack, AppError> {
        log::info!("✏️ [API] Actualizando socio: {}", id);
        let url = self.endpoint(&format!("/clients/{}", id));
        let request = self.authorized(Request::put(&url)).json(draft);
        self.fetch_ack(request, "update_member").await
    }

    pub async fn delete_member(&self, id: &str) -> Result<Ack, AppError> {
        log::info!("🗑️ [API] Eliminando socio: {}", id);
        let url = self.endpoint(&format!("/clients/{}", id));
        let request = self.authorized(Request::delete(&url)).build();
        self.fetch_ack(request, "delete_member").await
    }

    /// Devuelve el socio actualizado por el backend (fechas nuevas incluidas)
    pub async fn renew_member(&self, id: &str, renewal: &RenewalRequest) -> Result<Member, AppError> {
        log::info!("🔄 [API] Renovando {:?} del socio {}", renewal.servicio, id);
        let url = self.endpoint(&format!("/clients/renew/{}", id));
        let request = self.authorized(Request::put(&url)).json(renewal);
        let response: RenewalResponse = self.fetch_json(request, "renew_member").await?;
        Ok(response.client)
    }

    // ------------------------------------------------------------------------
    // Kiosco, estadísticas e historial
    // ------------------------------------------------------------------------

    pub async fn check_in(&self, dni: &str) -> Result<CheckInResult, AppError> {
        let url = self.endpoint(&format!("/clients/check/{}", dni));
        let request = self.authorized(Request::get(&url)).build();
        self.fetch_json(request, "check_in").await
    }

    pub async fn stats(&self) -> Result<DashboardStats, AppError> {
        let request = self.authorized(Request::get(&self.endpoint("/clients/stats"))).build();
        self.fetch_json(request, "stats").await
    }

    pub async fn history(&self) -> Result<Vec<AccessLogEntry>, AppError> {
        let request = self.authorized(Request::get(&self.endpoint("/clients/history"))).build();
        self.fetch_json(request, "history").await
    }

    /// Borra en el backend los registros con más de 7 días
    pub async fn clean_history(&self) -> Result<Ack, AppError> {
        log::info!("🧹 [API] Limpiando historial");
        let url = self.endpoint("/clients/history/clean");
        let request = self.authorized(Request::delete(&url)).build();
        self.fetch_ack(request, "clean_history").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AdminProfile;
    use crate::utils::MemoryStorage;

    fn client() -> (ApiClient, SessionStore) {
        let session = SessionStore::new(MemoryStorage::new());
        session.restore();
        (ApiClient::with_base_url("http://localhost:4000/api/", session.clone()), session)
    }

    #[test]
    fn endpoints_are_joined_with_single_slash() {
        let (api, _) = client();
        assert_eq!(api.endpoint("/clients"), "http://localhost:4000/api/clients");
        assert_eq!(api.endpoint("clients/stats"), "http://localhost:4000/api/clients/stats");
    }

    #[test]
    fn auth_header_follows_session() {
        let (api, session) = client();
        assert!(api.auth_header().is_none());

        session.login(AdminProfile::from_username("ana"), "jwt.x".into()).unwrap();
        assert_eq!(api.auth_header(), Some(("x-auth-token", "jwt.x".to_string())));

        session.logout();
        assert!(api.auth_header().is_none());
    }
}
