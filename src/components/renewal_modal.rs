use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::notification::{Notice, Notification};
use crate::error::AppError;
use crate::hooks::{use_mounted, use_session, use_submit_guard};
use crate::models::{Member, RenewalRequest, ServiceCategory};
use crate::services::reconcile_session;
use crate::viewmodels::member_form_viewmodel::{
    outstanding_balance, parse_amount, renewable_services, validate_renewal,
};

#[derive(Properties, PartialEq)]
pub struct RenewalModalProps {
    pub member: Member,
    pub on_close: Callback<()>,
    /// Recibe el socio actualizado que devolvió el backend
    pub on_renewed: Callback<Member>,
}

/// Arma el request con el precio vigente del servicio como sugerencia
fn initial_request(member: &Member, servicio: ServiceCategory) -> RenewalRequest {
    let precio_total = member
        .services
        .get(&servicio)
        .map(|s| s.precio_total)
        .unwrap_or_default();
    RenewalRequest { servicio, precio_total, monto_pagado: 0.0 }
}

#[function_component]
pub fn RenewalModal(props: &RenewalModalProps) -> Html {
    let session = use_session();
    let mounted = use_mounted();
    let in_flight = use_submit_guard();
    let services = renewable_services(&props.member);

    let request = {
        let member = props.member.clone();
        let first = services.first().copied();
        use_state(move || first.map(|cat| initial_request(&member, cat)))
    };
    let notice = use_state(|| None::<Notice>);
    let saving = use_state(|| false);

    let on_service = {
        let request = request.clone();
        let member = props.member.clone();
        Callback::from(move |e: Event| {
            let key = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Some(cat) = ServiceCategory::from_key(&key) {
                request.set(Some(initial_request(&member, cat)));
            }
        })
    };

    let on_amount = |field: fn(&mut RenewalRequest, f64)| {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let raw = e.target_unchecked_into::<HtmlInputElement>().value();
            if let Some(mut next) = (*request).clone() {
                field(&mut next, parse_amount(&raw).unwrap_or_default());
                request.set(Some(next));
            }
        })
    };
    let on_price = on_amount(|r, v| r.precio_total = v);
    let on_paid = on_amount(|r, v| r.monto_pagado = v);

    let on_submit = {
        let request = request.clone();
        let notice = notice.clone();
        let saving = saving.clone();
        let member = props.member.clone();
        let on_renewed = props.on_renewed.clone();
        let api = session.api.clone();
        let store = session.store.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(req) = (*request).clone() else {
                return;
            };
            if let Err(err) = validate_renewal(&member, &req) {
                notice.set(Some(Notice::from_error(&AppError::from(err))));
                return;
            }
            let Some(ticket) = in_flight.try_begin() else {
                return;
            };

            saving.set(true);
            let (api, store, mounted) = (api.clone(), store.clone(), mounted.clone());
            let (notice, saving, on_renewed) = (notice.clone(), saving.clone(), on_renewed.clone());
            let id = member.id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let _ticket = ticket;
                let result = api.renew_member(&id, &req).await;
                if !mounted.is_mounted() {
                    return;
                }
                saving.set(false);
                match result {
                    Ok(updated) => {
                        log::info!("✅ [RENEW] {} renovado", updated.full_name);
                        on_renewed.emit(updated);
                    }
                    Err(err) => {
                        reconcile_session(&store, &err);
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

    let body = match &*request {
        None => html! { <p>{"El socio no tiene servicios activos para renovar."}</p> },
        Some(req) => html! {
            <form class="renewal-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="renew-service">{"Servicio"}</label>
                    <select id="renew-service" onchange={on_service}>
                        { for services.iter().map(|cat| html! {
                            <option value={cat.key()} selected={*cat == req.servicio}>{ cat.label() }</option>
                        }) }
                    </select>
                </div>
                if let Some(debt) = outstanding_balance(&props.member, req.servicio) {
                    <p class="renewal-debt">{ format!("Saldo pendiente del período actual: ${:.0}", debt) }</p>
                }
                <div class="form-group">
                    <label for="renew-price">{"Precio total"}</label>
                    <input id="renew-price" type="number" min="0"
                        value={req.precio_total.to_string()} oninput={on_price} />
                </div>
                <div class="form-group">
                    <label for="renew-paid">{"Monto pagado"}</label>
                    <input id="renew-paid" type="number" min="0"
                        value={req.monto_pagado.to_string()} oninput={on_paid} />
                </div>
                <button type="submit" class="btn-primary" disabled={*saving}>
                    { if *saving { "Renovando..." } else { "Confirmar renovación" } }
                </button>
            </form>
        },
    };

    html! {
        <div class="modal-overlay">
            <div class="modal">
                <div class="modal-header">
                    <h3>{ format!("Renovar: {}", props.member.full_name) }</h3>
                    <button type="button" class="modal-close" onclick={props.on_close.reform(|_| ())}>{"✕"}</button>
                </div>
                <Notification notice={(*notice).clone()} on_close={on_dismiss} />
                { body }
            </div>
        </div>
    }
}
