pub mod login_view;
pub mod register_view;
pub mod check_in_view;
pub mod dashboard_view;
pub mod member_list_view;
pub mod member_form_view;
pub mod access_history_view;
pub mod not_found_view;

pub use login_view::LoginView;
pub use register_view::RegisterView;
pub use check_in_view::CheckInView;
pub use dashboard_view::DashboardView;
pub use member_list_view::MemberListView;
pub use member_form_view::MemberFormView;
pub use access_history_view::AccessHistoryView;
pub use not_found_view::NotFoundView;
