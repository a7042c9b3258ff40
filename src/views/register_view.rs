use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Notice, Notification};
use crate::hooks::{use_mounted, use_session, use_submit_guard};
use crate::router::{LoginQuery, Route};
use crate::services::register_admin;

#[function_component]
pub fn RegisterView() -> Html {
    let session = use_session();
    let mounted = use_mounted();
    let in_flight = use_submit_guard();
    let navigator = use_navigator();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let notice = use_state(|| None::<Notice>);

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let notice = notice.clone();

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
            let api = session.api.clone();
            let (mounted, navigator, notice) = (mounted.clone(), navigator.clone(), notice.clone());

            wasm_bindgen_futures::spawn_local(async move {
                let _ticket = ticket;
                let result = register_admin(&api, &username, &password).await;
                if !mounted.is_mounted() {
                    return;
                }
                match result {
                    Ok(ack) => {
                        log::info!("✅ [REGISTER] Admin creado: {}", username);
                        let message = ack.msg.unwrap_or_else(|| "Administrador registrado".into());
                        let Some(navigator) = &navigator else {
                            notice.set(Some(Notice::success(message)));
                            return;
                        };
                        // El aviso se muestra en el login
                        if let Err(e) = navigator.push_with_query(&Route::Login, &LoginQuery::with_notice(message)) {
                            log::error!("❌ [ROUTER] {}", e);
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(err) => notice.set(Some(Notice::from_error(&err))),
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
                    <h1>{"Registro de administrador"}</h1>
                </div>

                <Notification notice={(*notice).clone()} on_close={on_dismiss} />

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="reg-usuario">{"Usuario"}</label>
                        <input type="text" id="reg-usuario" ref={username_ref} required=true />
                    </div>
                    <div class="form-group">
                        <label for="reg-password">{"Contraseña"}</label>
                        <input type="password" id="reg-password" ref={password_ref} required=true />
                    </div>
                    <button type="submit" class="btn-login">{"Registrar"}</button>
                    <div class="login-footer">
                        <Link<Route> to={Route::Login} classes="btn-register-link">
                            {"Ya tengo cuenta"}
                        </Link<Route>>
                    </div>
                </form>
            </div>
        </div>
    }
}
