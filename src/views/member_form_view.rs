// ============================================================================
// MEMBER FORM - Alta y edición de socios
// ============================================================================
// Con `id` carga el socio (GET /clients/:id) y guarda con PUT; sin `id`
// arranca vacío y guarda con POST. Elegir una modalidad aplica su precio
// de lista, que se puede editar después.
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Notice, Notification};
use crate::error::AppError;
use crate::hooks::{use_mounted, use_session, use_submit_guard};
use crate::models::{MemberDraft, ServiceCategory, ServiceDraft};
use crate::router::Route;
use crate::services::reconcile_session;
use crate::viewmodels::member_form_viewmodel::{parse_amount, validate_draft};

#[derive(Properties, PartialEq)]
pub struct MemberFormViewProps {
    #[prop_or_default]
    pub id: Option<String>,
}

#[derive(Clone, Copy)]
enum AmountField {
    Total,
    Paid,
}

fn set_amount(draft: &mut MemberDraft, category: ServiceCategory, field: AmountField, value: f64) {
    let service = draft.servicios.entry(category).or_default();
    match field {
        AmountField::Total => service.precio_total = value,
        AmountField::Paid => service.monto_pagado = value,
    }
}

#[function_component]
pub fn MemberFormView(props: &MemberFormViewProps) -> Html {
    let session = use_session();
    let mounted = use_mounted();
    let in_flight = use_submit_guard();
    let navigator = use_navigator();
    let draft = use_state(MemberDraft::empty);
    let loading = use_state(|| props.id.is_some());
    let saving = use_state(|| false);
    let notice = use_state(|| None::<Notice>);

    {
        let (api, store) = (session.api.clone(), session.store.clone());
        let (draft, loading, notice, mounted) = (draft.clone(), loading.clone(), notice.clone(), mounted.clone());
        use_effect_with(props.id.clone(), move |id| {
            if let Some(id) = id.clone() {
                loading.set(true);
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api.get_member(&id).await;
                    if !mounted.is_mounted() {
                        return;
                    }
                    loading.set(false);
                    match result {
                        Ok(member) => draft.set(MemberDraft::from_member(&member)),
                        Err(err) => {
                            reconcile_session(&store, &err);
                            notice.set(Some(Notice::from_error(&err)));
                        }
                    }
                });
            } else {
                draft.set(MemberDraft::empty());
                loading.set(false);
            }
            || ()
        });
    }

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.nombre = e.target_unchecked_into::<HtmlInputElement>().value();
            draft.set(next);
        })
    };

    let on_dni = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.dni = e.target_unchecked_into::<HtmlInputElement>().value();
            draft.set(next);
        })
    };

    let on_modality = |category: ServiceCategory| {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let mut next = (*draft).clone();
            next.set_modality(category, &e.target_unchecked_into::<HtmlSelectElement>().value());
            draft.set(next);
        })
    };

    let on_amount = |category: ServiceCategory, field: AmountField| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let raw = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*draft).clone();
            set_amount(&mut next, category, field, parse_amount(&raw).unwrap_or_default());
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let (saving, notice) = (saving.clone(), notice.clone());
        let (api, store) = (session.api.clone(), session.store.clone());
        let id = props.id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let clean = match validate_draft(&draft) {
                Ok(clean) => clean,
                Err(err) => {
                    notice.set(Some(Notice::from_error(&AppError::from(err))));
                    return;
                }
            };
            let Some(ticket) = in_flight.try_begin() else {
                return;
            };

            saving.set(true);
            let (api, store, id) = (api.clone(), store.clone(), id.clone());
            let (saving, notice, mounted, navigator) = (saving.clone(), notice.clone(), mounted.clone(), navigator.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let _ticket = ticket;
                let result = match &id {
                    Some(id) => api.update_member(id, &clean).await,
                    None => api.create_member(&clean).await,
                };
                if !mounted.is_mounted() {
                    return;
                }
                saving.set(false);
                match result {
                    Ok(_) => {
                        log::info!("✅ [MEMBERS] Socio guardado: {}", clean.dni);
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Members);
                        }
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

    let title = if props.id.is_some() { "Editar socio" } else { "Nuevo socio" };
    if *loading {
        return html! { <p class="loading">{"Cargando socio..."}</p> };
    }

    let service_row = |category: ServiceCategory| {
        let current = draft.servicios.get(&category).cloned().unwrap_or_else(ServiceDraft::default);
        let absent = current.modalidad.is_absent();
        html! {
            <fieldset class="service-row" key={category.key()}>
                <legend>{ category.label() }</legend>
                <select onchange={on_modality(category)}>
                    { for category.modality_options().iter().map(|option| html! {
                        <option value={*option} selected={current.modalidad.as_str() == *option}>{ *option }</option>
                    }) }
                </select>
                <label>
                    {"Precio total"}
                    <input type="number" min="0" disabled={absent}
                        value={current.precio_total.to_string()}
                        oninput={on_amount(category, AmountField::Total)} />
                </label>
                <label>
                    {"Pagado"}
                    <input type="number" min="0" disabled={absent}
                        value={current.monto_pagado.to_string()}
                        oninput={on_amount(category, AmountField::Paid)} />
                </label>
            </fieldset>
        }
    };

    html! {
        <div class="member-form">
            <h1>{ title }</h1>
            <Notification notice={(*notice).clone()} on_close={on_dismiss} />
            <form onsubmit={on_submit}>
                <div class="form-group">
                    <label for="nombre">{"Nombre completo"}</label>
                    <input id="nombre" type="text" value={draft.nombre.clone()} oninput={on_name} required=true />
                </div>
                <div class="form-group">
                    <label for="dni">{"DNI"}</label>
                    <input id="dni" type="text" inputmode="numeric" maxlength="8"
                        value={draft.dni.clone()} oninput={on_dni} required=true />
                </div>
                <h2>{"Servicios"}</h2>
                { for ServiceCategory::ALL.into_iter().map(service_row) }
                <div class="form-actions">
                    <Link<Route> to={Route::Members} classes="btn-secondary">{"Cancelar"}</Link<Route>>
                    <button type="submit" class="btn-primary" disabled={*saving}>
                        { if *saving { "Guardando..." } else { "Guardar" } }
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_are_set_per_category() {
        let mut draft = MemberDraft::empty();
        draft.set_modality(ServiceCategory::Profe, "3 Días");
        set_amount(&mut draft, ServiceCategory::Profe, AmountField::Paid, 5_000.0);
        set_amount(&mut draft, ServiceCategory::Profe, AmountField::Total, 18_000.0);

        let profe = &draft.servicios[&ServiceCategory::Profe];
        assert_eq!(profe.monto_pagado, 5_000.0);
        assert_eq!(profe.precio_total, 18_000.0);
        assert_eq!(draft.servicios[&ServiceCategory::Gym].precio_total, 0.0);
    }
}
