pub mod auth;
pub mod member;
pub mod renewal;
pub mod check_in;
pub mod access_log;
pub mod stats;

pub use auth::{AdminProfile, Ack, Credentials, LoginResponse};
pub use member::{Member, MemberDraft, Modality, ServiceCategory, ServiceDraft, ServiceSubscription};
pub use renewal::{RenewalRequest, RenewalResponse};
pub use check_in::CheckInResult;
pub use access_log::AccessLogEntry;
pub use stats::{DashboardStats, Semaphore};
