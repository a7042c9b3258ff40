pub mod use_session;
pub mod use_mounted;
pub mod use_submit_guard;

pub use use_session::{use_session, SessionContext, SessionProvider, UseSessionHandle};
pub use use_mounted::{use_mounted, MountFlag};
pub use use_submit_guard::{use_submit_guard, InFlight, SubmitTicket};
