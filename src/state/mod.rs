// ============================================================================
// STATE MODULE - Estado compartido con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod session_store;

pub use reactivity::{Subscribers, Subscription};
pub use session_store::{Session, SessionPhase, SessionStore};
