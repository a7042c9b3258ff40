use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::components::route_guard::{GuardKind, PrivateRoute, PublicRoute};
use crate::hooks::SessionProvider;
use crate::router::Route;
use crate::state::SessionStore;
use crate::views::{
    AccessHistoryView, CheckInView, DashboardView, LoginView, MemberFormView, MemberListView,
    NotFoundView, RegisterView,
};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// Sesión ya restaurada desde localStorage
    pub session: SessionStore,
}

#[function_component]
pub fn App(props: &AppProps) -> Html {
    html! {
        <SessionProvider store={props.session.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </SessionProvider>
    }
}

fn switch(route: Route) -> Html {
    let content = match &route {
        Route::Home => return html! { <Redirect<Route> to={Route::Login} /> },
        Route::Login => html! { <LoginView /> },
        Route::Register => html! { <RegisterView /> },
        Route::CheckIn => html! { <CheckInView /> },
        Route::Dashboard => html! { <DashboardView /> },
        Route::Members => html! { <MemberListView /> },
        Route::NewMember => html! { <MemberFormView /> },
        Route::EditMember { id } => html! { <MemberFormView id={Some(id.clone())} /> },
        Route::History => html! { <AccessHistoryView /> },
        Route::NotFound => html! { <NotFoundView /> },
    };

    match route.guard() {
        Some(GuardKind::PublicOnly) => html! { <PublicRoute>{ content }</PublicRoute> },
        Some(GuardKind::Protected) => html! {
            <PrivateRoute>
                <AdminLayout>{ content }</AdminLayout>
            </PrivateRoute>
        },
        None => content,
    }
}
