// ============================================================================
// ADMIN LAYOUT - Sidebar de navegación + contenido del backoffice
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session;
use crate::router::Route;

const NAV_ITEMS: [(&str, &str, Route); 4] = [
    ("📊", "Dashboard", Route::Dashboard),
    ("👥", "Socios", Route::Members),
    ("➕", "Nuevo socio", Route::NewMember),
    ("🕘", "Historial", Route::History),
];

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub children: Children,
}

#[function_component]
pub fn AdminLayout(props: &AdminLayoutProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let current = use_route::<Route>();

    let on_logout = {
        let logout = session.logout.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let admin_name = session
        .session
        .admin
        .as_ref()
        .map(|a| a.display_name().to_string())
        .unwrap_or_default();

    html! {
        <div class="admin-layout">
            <aside class="sidebar">
                <div class="sidebar-header">
                    <h2>{"🏋️ Gym Admin"}</h2>
                    <span class="sidebar-user">{ admin_name }</span>
                </div>
                <nav class="sidebar-nav">
                    { for NAV_ITEMS.iter().map(|(icon, label, route)| {
                        let active = current.as_ref() == Some(route);
                        html! {
                            <Link<Route> to={route.clone()} classes={classes!("nav-item", active.then_some("active"))}>
                                <span class="nav-icon">{ *icon }</span>
                                { *label }
                            </Link<Route>>
                        }
                    }) }
                    <Link<Route> to={Route::CheckIn} classes="nav-item nav-kiosk">
                        <span class="nav-icon">{"🚪"}</span>
                        {"Kiosco de ingreso"}
                    </Link<Route>>
                </nav>
                <button type="button" class="btn-logout" onclick={on_logout}>
                    {"Cerrar sesión"}
                </button>
            </aside>
            <main class="admin-content">
                { props.children.clone() }
            </main>
        </div>
    }
}
