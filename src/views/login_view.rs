use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Notice, Notification};
use crate::hooks::{use_mounted, use_session, use_submit_guard};
use crate::router::{LoginQuery, Route};
use crate::services::login_admin;

#[function_component]
pub fn LoginView() -> Html {
    let session = use_session();
    let mounted = use_mounted();
    let in_flight = use_submit_guard();
    let navigator = use_navigator();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let query_notice = use_location()
        .and_then(|l| l.query::<LoginQuery>().ok())
        .and_then(|q| q.notice().map(Notice::success));
    let notice = use_state(move || query_notice);
    let loading = use_state(|| false);

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let notice = notice.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let Some(ticket) = in_flight.try_begin() else {
                return;
            };

            let username = username_input.value();
            let password = password_input.value();
            let (api, store) = (session.api.clone(), session.store.clone());
            let (mounted, navigator) = (mounted.clone(), navigator.clone());
            let (notice, loading) = (notice.clone(), loading.clone());

            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let _ticket = ticket;
                let result = login_admin(&api, &store, &username, &password).await;
                if !mounted.is_mounted() {
                    return;
                }
                loading.set(false);
                match result {
                    Ok(_) => {
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(err) => {
                        log::warn!("⚠️ [LOGIN] {}", err);
                        notice.set(Some(Notice::from_error(&err)));
                    }
                }
            });
        })
    };

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🏋️"}</div>
                    </div>
                    <h1>{"Gym Admin"}</h1>
                    <p>{"Panel de administración"}</p>
                </div>

                <Notification notice={(*notice).clone()} on_close={on_dismiss} />

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="usuario">{"Usuario"}</label>
                        <input
                            type="text"
                            id="usuario"
                            placeholder="Ingresa tu usuario"
                            ref={username_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Ingresa tu contraseña"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn-login" disabled={*loading}>
                        <span class="btn-text">
                            { if *loading { "Ingresando..." } else { "Iniciar Sesión" } }
                        </span>
                    </button>

                    <div class="login-footer">
                        <Link<Route> to={Route::Register} classes="btn-register-link">
                            {"Crear cuenta de administrador"}
                        </Link<Route>>
                        <Link<Route> to={Route::CheckIn} classes="btn-register-link">
                            {"Ir al kiosco de ingreso"}
                        </Link<Route>>
                    </div>
                </form>
            </div>
        </div>
    }
}
