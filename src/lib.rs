// ============================================================================
// GYM ADMIN - PANEL DE ADMINISTRACIÓN DEL GIMNASIO (YEW + WASM)
// ============================================================================
// Capas:
// - Views: Pantallas (login, kiosco, socios, historial, dashboard)
// - Components: Guards de rutas, layout y piezas reutilizables
// - ViewModels: Estado derivado de socios (funciones puras)
// - Services: SOLO comunicación API
// - State: Sesión con Rc<RefCell> + suscriptores
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod error;
pub mod utils;
pub mod models;
pub mod state;
pub mod services;
pub mod viewmodels;
pub mod hooks;
pub mod router;
pub mod components;
pub mod views;

pub use components::{App, AppProps};
pub use error::{AppError, ValidationError};
pub use state::SessionStore;
