use chrono::{Local, Utc};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{Notice, Notification};
use crate::hooks::{use_mounted, use_session, use_submit_guard};
use crate::models::AccessLogEntry;
use crate::services::reconcile_session;
use crate::utils::HISTORY_RETENTION_DAYS;
use crate::viewmodels::history_viewmodel::{filter_by_national_id, purgeable_count};

#[function_component]
pub fn AccessHistoryView() -> Html {
    let session = use_session();
    let mounted = use_mounted();
    let in_flight = use_submit_guard();
    let entries = use_state(|| None::<Vec<AccessLogEntry>>);
    let dni_filter = use_state(String::new);
    let notice = use_state(|| None::<Notice>);
    // Se incrementa para volver a pedir el historial
    let reload = use_state(|| 0u32);

    {
        let (api, store) = (session.api.clone(), session.store.clone());
        let (entries, notice, mounted) = (entries.clone(), notice.clone(), mounted.clone());
        use_effect_with(*reload, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = api.history().await;
                if !mounted.is_mounted() {
                    return;
                }
                match result {
                    Ok(list) => entries.set(Some(list)),
                    Err(err) => {
                        reconcile_session(&store, &err);
                        notice.set(Some(Notice::from_error(&err)));
                    }
                }
            });
            || ()
        });
    }

    let on_filter = {
        let dni_filter = dni_filter.clone();
        Callback::from(move |e: InputEvent| {
            dni_filter.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_purge = {
        let (api, store) = (session.api.clone(), session.store.clone());
        let (entries, notice, reload) = (entries.clone(), notice.clone(), reload.clone());
        Callback::from(move |_: MouseEvent| {
            let stale = (*entries)
                .as_ref()
                .map(|list| purgeable_count(list, Utc::now()))
                .unwrap_or_default();
            let question = format!(
                "¿Borrar los registros con más de {} días? ({} registros)",
                HISTORY_RETENTION_DAYS, stale
            );
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message(&question).ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let Some(ticket) = in_flight.try_begin() else {
                return;
            };

            let (api, store, mounted) = (api.clone(), store.clone(), mounted.clone());
            let (notice, reload) = (notice.clone(), reload.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let _ticket = ticket;
                let result = api.clean_history().await;
                if !mounted.is_mounted() {
                    return;
                }
                match result {
                    Ok(ack) => {
                        notice.set(Some(Notice::success(
                            ack.msg.unwrap_or_else(|| "Historial depurado".into()),
                        )));
                        reload.set(*reload + 1);
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

    let table = match &*entries {
        None => html! { <p class="loading">{"Cargando historial..."}</p> },
        Some(list) => {
            let visible = filter_by_national_id(list, &dni_filter);
            html! {
                <table class="history-table">
                    <thead>
                        <tr>
                            <th>{"Fecha"}</th>
                            <th>{"Socio"}</th>
                            <th>{"DNI"}</th>
                            <th>{"Estado al ingresar"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for visible.into_iter().map(|entry| html! {
                            <tr key={entry.id.clone()}>
                                <td>{ entry.timestamp.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string() }</td>
                                <td>{ &entry.member_name }</td>
                                <td>{ &entry.national_id }</td>
                                <td class={if entry.was_active() { "status-ok" } else { "status-past-due" }}>
                                    { &entry.status_at_entry }
                                </td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            }
        }
    };

    html! {
        <div class="access-history">
            <div class="list-header">
                <h1>{"Historial de ingresos"}</h1>
                <button type="button" class="btn-danger" onclick={on_purge}>
                    { format!("Borrar registros de más de {} días", HISTORY_RETENTION_DAYS) }
                </button>
            </div>
            <Notification notice={(*notice).clone()} on_close={on_dismiss} />
            <input
                type="search"
                placeholder="Filtrar por DNI"
                value={(*dni_filter).clone()}
                oninput={on_filter}
            />
            { table }
        </div>
    }
}
