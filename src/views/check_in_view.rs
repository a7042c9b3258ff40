// ============================================================================
// CHECK-IN - Kiosco de ingreso por DNI
// ============================================================================
// El resultado se limpia solo (5 s por defecto), los errores a los 3 s.
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::error::AppError;
use crate::hooks::{use_mounted, use_session, use_submit_guard};
use crate::models::CheckInResult;
use crate::utils::CHECK_IN_ERROR_MS;
use crate::viewmodels::member_form_viewmodel::validate_national_id;

#[derive(Debug, Clone, PartialEq)]
enum KioskOutcome {
    Admitted(CheckInResult),
    Failed(String),
}

impl KioskOutcome {
    fn visible_ms(&self) -> u32 {
        match self {
            KioskOutcome::Admitted(_) => CONFIG.check_in_result_seconds * 1_000,
            KioskOutcome::Failed(_) => CHECK_IN_ERROR_MS,
        }
    }
}

/// Resultado en pantalla. `shown` cambia en cada ingreso, aunque se repita
/// el mismo DNI, y el temporizador solo borra el resultado que lo armó.
#[derive(Debug, Default, PartialEq)]
struct KioskDisplay {
    shown: u32,
    outcome: Option<KioskOutcome>,
}

enum KioskAction {
    Show(KioskOutcome),
    Expire(u32),
}

impl Reducible for KioskDisplay {
    type Action = KioskAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            KioskAction::Show(outcome) => Rc::new(Self {
                shown: self.shown.wrapping_add(1),
                outcome: Some(outcome),
            }),
            KioskAction::Expire(shown) if shown == self.shown => Rc::new(Self {
                shown,
                outcome: None,
            }),
            KioskAction::Expire(_) => self,
        }
    }
}

#[function_component]
pub fn CheckInView() -> Html {
    let session = use_session();
    let mounted = use_mounted();
    let in_flight = use_submit_guard();
    let dni_ref = use_node_ref();
    let display = use_reducer(KioskDisplay::default);

    {
        let dispatcher = display.dispatcher();
        let visible_ms = display.outcome.as_ref().map(KioskOutcome::visible_ms);
        use_effect_with((display.shown, visible_ms), move |&(shown, visible_ms)| {
            let timeout = visible_ms
                .map(|ms| Timeout::new(ms, move || dispatcher.dispatch(KioskAction::Expire(shown))));
            move || drop(timeout)
        });
    }

    let on_submit = {
        let dni_ref = dni_ref.clone();
        let dispatcher = display.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = dni_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let dni = input.value().trim().to_string();
            input.set_value("");

            if let Err(err) = validate_national_id(&dni) {
                dispatcher.dispatch(KioskAction::Show(KioskOutcome::Failed(
                    AppError::from(err).user_message(),
                )));
                return;
            }
            let Some(ticket) = in_flight.try_begin() else {
                return;
            };

            let (api, mounted, dispatcher) = (session.api.clone(), mounted.clone(), dispatcher.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let _ticket = ticket;
                let result = api.check_in(&dni).await;
                if !mounted.is_mounted() {
                    return;
                }
                let next = match result {
                    Ok(res) => {
                        log::info!("🚪 [CHECK-IN] {} -> {}", res.nombre, res.status);
                        KioskOutcome::Admitted(res)
                    }
                    Err(err) => {
                        log::warn!("⚠️ [CHECK-IN] {}: {}", dni, err);
                        KioskOutcome::Failed(err.user_message())
                    }
                };
                dispatcher.dispatch(KioskAction::Show(next));
            });
        })
    };

    let result_card = match &display.outcome {
        None => html! {},
        Some(KioskOutcome::Failed(msg)) => html! {
            <div class="check-in-card check-in-error">
                <h2>{"⛔ Acceso denegado"}</h2>
                <p>{ msg }</p>
            </div>
        },
        Some(KioskOutcome::Admitted(res)) => {
            let class = if res.is_active() { "check-in-ok" } else { "check-in-error" };
            html! {
                <div class={classes!("check-in-card", class)}>
                    <h2>{ &res.status }</h2>
                    <p class="check-in-name">{ &res.nombre }</p>
                    <ul class="check-in-services">
                        { for res.active_services().map(|(service, modality)| html! {
                            <li>{ format!("{}: {}", service, modality) }</li>
                        }) }
                    </ul>
                    if let Some(due) = res.vence {
                        <p class="check-in-due">{ format!("Vence: {}", due.format("%d/%m/%Y")) }</p>
                    }
                </div>
            }
        }
    };

    html! {
        <div class="check-in-screen">
            <h1>{"Bienvenido"}</h1>
            <p>{"Ingresá tu DNI para registrar tu entrada"}</p>
            <form class="check-in-form" onsubmit={on_submit}>
                <input
                    type="text"
                    inputmode="numeric"
                    maxlength="8"
                    placeholder="DNI"
                    ref={dni_ref}
                    autofocus=true
                />
                <button type="submit" class="btn-primary">{"Ingresar"}</button>
            </form>
            { result_card }
        </div>
    }
}
