pub mod app;
pub mod admin_layout;
pub mod notification;
pub mod renewal_modal;
pub mod route_guard;
pub mod status_badge;

pub use app::{App, AppProps};
pub use admin_layout::AdminLayout;
pub use notification::{Notice, NoticeKind, Notification};
pub use renewal_modal::RenewalModal;
pub use route_guard::{evaluate_guard, GuardKind, GuardOutcome, PrivateRoute, PublicRoute};
pub use status_badge::{MemberStatusBadge, ServiceBadge, TrafficLightBar};
