pub mod member_status;
pub mod member_list_viewmodel;
pub mod member_form_viewmodel;
pub mod history_viewmodel;

pub use member_status::{member_status, service_status, MemberStatus, ServiceStatus, TrafficLight};
pub use member_list_viewmodel::{MemberFilter, MemberListQuery, Page};
