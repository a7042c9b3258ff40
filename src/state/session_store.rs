// ============================================================================
// SESSION STORE - Token + perfil del admin, persistidos en localStorage
// ============================================================================
// Estados: Initializing -> (restore) -> Anonymous | Authenticated
//          Anonymous -(login)-> Authenticated -(logout)-> Anonymous
// `token` y `admin` se setean y se limpian siempre juntos.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::AppError;
use crate::models::AdminProfile;
use crate::state::reactivity::{Subscribers, Subscription};
use crate::utils::{
    load_json, save_json, BrowserStorage, DurableStorage, STORAGE_KEY_ADMIN, STORAGE_KEY_TOKEN,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Todavía no se leyó el storage
    Initializing,
    Anonymous,
    Authenticated,
}

/// Foto inmutable de la sesión
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub admin: Option<AdminProfile>,
    pub token: Option<String>,
    pub phase: SessionPhase,
}

impl Session {
    fn initializing() -> Self {
        Self { admin: None, token: None, phase: SessionPhase::Initializing }
    }

    fn anonymous() -> Self {
        Self { admin: None, token: None, phase: SessionPhase::Anonymous }
    }

    fn authenticated(admin: AdminProfile, token: String) -> Self {
        Self { admin: Some(admin), token: Some(token), phase: SessionPhase::Authenticated }
    }

    pub fn is_ready(&self) -> bool {
        self.phase != SessionPhase::Initializing
    }
}

/// Handle clonable de la sesión; todos los clones ven el mismo estado.
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<RefCell<Session>>,
    storage: Rc<dyn DurableStorage>,
    subscribers: Subscribers<Session>,
}

impl SessionStore {
    pub fn new<S: DurableStorage + 'static>(storage: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Session::initializing())),
            storage: Rc::new(storage),
            subscribers: Subscribers::new(),
        }
    }

    /// Store sobre el localStorage del navegador
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    /// Lee la sesión guardada. Solo actúa en `Initializing`; después es no-op.
    ///
    /// Si falta una de las dos claves (o `admin` está corrupto) se borran
    /// ambas y la sesión queda anónima.
    pub fn restore(&self) -> SessionPhase {
        let current = self.phase();
        if current != SessionPhase::Initializing {
            log::debug!("[SESSION] restore() ignorado, sesión ya en {:?}", current);
            return current;
        }

        let token = self
            .storage
            .get_item(STORAGE_KEY_TOKEN)
            .filter(|t| !t.trim().is_empty());
        let admin = load_json::<AdminProfile>(self.storage.as_ref(), STORAGE_KEY_ADMIN);

        let restored = match (token, admin) {
            (Some(token), Some(admin)) => {
                log::info!("✅ [SESSION] Sesión restaurada: {}", admin.display_name());
                Session::authenticated(admin, token)
            }
            (None, None) if self.storage_is_empty() => {
                log::info!("[SESSION] Sin sesión guardada");
                Session::anonymous()
            }
            _ => {
                log::warn!("⚠️ [SESSION] Sesión guardada incompleta, se descarta");
                self.clear_storage();
                Session::anonymous()
            }
        };

        self.replace(restored)
    }

    /// Guarda token y perfil en memoria y storage (los dos o ninguno).
    pub fn login(&self, admin: AdminProfile, token: String) -> Result<(), AppError> {
        if token.trim().is_empty() {
            return Err(AppError::Unauthorized("El servidor no devolvió un token".into()));
        }

        self.storage.set_item(STORAGE_KEY_TOKEN, &token)?;
        if let Err(e) = save_json(self.storage.as_ref(), STORAGE_KEY_ADMIN, &admin) {
            if let Err(rollback) = self.storage.remove_item(STORAGE_KEY_TOKEN) {
                log::error!("❌ [SESSION] No se pudo revertir el token: {}", rollback);
            }
            return Err(e);
        }

        log::info!("🔐 [SESSION] Login: {}", admin.display_name());
        self.replace(Session::authenticated(admin, token));
        Ok(())
    }

    /// Limpia memoria y storage. La memoria se limpia aunque falle el storage.
    pub fn logout(&self) {
        self.clear_storage();
        log::info!("👋 [SESSION] Logout");
        self.replace(Session::anonymous());
    }

    pub fn session(&self) -> Session {
        self.inner.borrow().clone()
    }

    pub fn phase(&self) -> SessionPhase {
        self.inner.borrow().phase
    }

    pub fn is_ready(&self) -> bool {
        self.inner.borrow().is_ready()
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase() == SessionPhase::Authenticated
    }

    pub fn token(&self) -> Option<String> {
        self.inner.borrow().token.clone()
    }

    pub fn admin(&self) -> Option<AdminProfile> {
        self.inner.borrow().admin.clone()
    }

    /// Se llama con la nueva sesión después de cada restore/login/logout
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Session) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    fn replace(&self, next: Session) -> SessionPhase {
        let phase = next.phase;
        *self.inner.borrow_mut() = next.clone();
        self.subscribers.notify(&next);
        phase
    }

    fn storage_is_empty(&self) -> bool {
        self.storage.get_item(STORAGE_KEY_TOKEN).is_none()
            && self.storage.get_item(STORAGE_KEY_ADMIN).is_none()
    }

    fn clear_storage(&self) {
        for key in [STORAGE_KEY_TOKEN, STORAGE_KEY_ADMIN] {
            if let Err(e) = self.storage.remove_item(key) {
                log::error!("❌ [SESSION] {}", e);
            }
        }
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
