// ============================================================================
// MEMBER LIST - Listado de socios con búsqueda, filtros y paginación
// ============================================================================

use std::rc::Rc;

use chrono::Utc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{MemberStatusBadge, Notice, Notification, RenewalModal, ServiceBadge, TrafficLightBar};
use crate::config::CONFIG;
use crate::hooks::{use_mounted, use_session};
use crate::models::Member;
use crate::router::Route;
use crate::services::reconcile_session;
use crate::viewmodels::member_list_viewmodel::{filter_members, paginate, remove_member, replace_member};
use crate::viewmodels::member_status::{member_status, service_statuses};
use crate::viewmodels::{MemberFilter, MemberListQuery, TrafficLight};

/// Copia local de los socios; `None` mientras carga
#[derive(Debug, Default, PartialEq)]
struct MemberListState {
    members: Option<Vec<Member>>,
}

enum MemberListAction {
    Loaded(Vec<Member>),
    Renewed(Member),
    Removed(String),
}

impl Reducible for MemberListState {
    type Action = MemberListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut members = self.members.clone().unwrap_or_default();
        match action {
            MemberListAction::Loaded(list) => members = list,
            MemberListAction::Renewed(updated) => {
                if !replace_member(&mut members, updated) {
                    log::warn!("⚠️ [MEMBERS] Socio renovado no estaba en la lista");
                }
            }
            MemberListAction::Removed(id) => remove_member(&mut members, &id),
        }
        Rc::new(Self { members: Some(members) })
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[function_component]
pub fn MemberListView() -> Html {
    let session = use_session();
    let mounted = use_mounted();
    let state = use_reducer(MemberListState::default);
    let notice = use_state(|| None::<Notice>);
    let search = use_state(String::new);
    let page = use_state_eq(|| 1usize);
    let renewing = use_state(|| None::<Member>);

    let query_filter = use_location()
        .and_then(|l| l.query::<MemberListQuery>().ok())
        .unwrap_or_default()
        .filter();
    let filter = use_state_eq(|| query_filter);

    // Links del dashboard con otro ?filter= sin desmontar la vista
    {
        let (filter, page) = (filter.clone(), page.clone());
        use_effect_with(query_filter, move |f| {
            filter.set(*f);
            page.set(1);
            || ()
        });
    }

    {
        let (api, store) = (session.api.clone(), session.store.clone());
        let (state, notice, mounted) = (state.clone(), notice.clone(), mounted.clone());
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = api.list_members().await;
                if !mounted.is_mounted() {
                    return;
                }
                match result {
                    Ok(list) => state.dispatch(MemberListAction::Loaded(list)),
                    Err(err) => {
                        reconcile_session(&store, &err);
                        notice.set(Some(Notice::from_error(&err)));
                    }
                }
            });
            || ()
        });
    }

    let on_search = {
        let (search, page) = (search.clone(), page.clone());
        Callback::from(move |e: InputEvent| {
            search.set(e.target_unchecked_into::<HtmlInputElement>().value());
            page.set(1);
        })
    };

    let on_filter = {
        let (filter, page) = (filter.clone(), page.clone());
        Callback::from(move |e: Event| {
            let key = e.target_unchecked_into::<HtmlSelectElement>().value();
            filter.set(MemberFilter::from_key(&key));
            page.set(1);
        })
    };

    let on_delete = {
        let (api, store) = (session.api.clone(), session.store.clone());
        let (state, notice, mounted) = (state.clone(), notice.clone(), mounted.clone());
        Callback::from(move |member: Member| {
            if !confirm(&format!("¿Eliminar a {}?", member.full_name)) {
                return;
            }
            let (api, store) = (api.clone(), store.clone());
            let (state, notice, mounted) = (state.clone(), notice.clone(), mounted.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let result = api.delete_member(&member.id).await;
                if !mounted.is_mounted() {
                    return;
                }
                match result {
                    Ok(_) => {
                        state.dispatch(MemberListAction::Removed(member.id.clone()));
                        notice.set(Some(Notice::success(format!("{} eliminado", member.full_name))));
                    }
                    Err(err) => {
                        reconcile_session(&store, &err);
                        notice.set(Some(Notice::from_error(&err)));
                    }
                }
            });
        })
    };

    let on_renewed = {
        let (state, notice, renewing) = (state.clone(), notice.clone(), renewing.clone());
        Callback::from(move |member: Member| {
            notice.set(Some(Notice::success(format!("Servicio de {} renovado", member.full_name))));
            state.dispatch(MemberListAction::Renewed(member));
            renewing.set(None);
        })
    };

    let on_close_renewal = {
        let renewing = renewing.clone();
        Callback::from(move |_| renewing.set(None))
    };

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    let go_to = |target: usize| {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.set(target))
    };

    let now = Utc::now();
    let Some(members) = state.members.as_ref() else {
        return html! {
            <div class="member-list">
                <Notification notice={(*notice).clone()} on_close={on_dismiss} />
                <p class="loading">{"Cargando socios..."}</p>
            </div>
        };
    };

    let light = TrafficLight::from_members(members, now);
    let visible = filter_members(members, &search, *filter, now);
    let current = paginate(&visible, *page, CONFIG.items_per_page);

    html! {
        <div class="member-list">
            <div class="list-header">
                <h1>{ filter.title() }</h1>
                <Link<Route> to={Route::NewMember} classes="btn-primary">{"➕ Nuevo socio"}</Link<Route>>
            </div>

            <Notification notice={(*notice).clone()} on_close={on_dismiss} />
            <TrafficLightBar light={light} />

            <div class="list-controls">
                <input
                    type="search"
                    placeholder="Buscar por nombre o DNI"
                    value={(*search).clone()}
                    oninput={on_search}
                />
                <select onchange={on_filter}>
                    { for MemberFilter::ALL.iter().map(|f| html! {
                        <option value={f.key()} selected={*f == *filter}>{ f.key() }</option>
                    }) }
                </select>
            </div>

            <table class="member-table">
                <thead>
                    <tr>
                        <th>{"Nombre"}</th>
                        <th>{"DNI"}</th>
                        <th>{"Servicios"}</th>
                        <th>{"Estado"}</th>
                        <th>{"Acciones"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for current.items.iter().map(|member| {
                        let member = (*member).clone();
                        let renew = {
                            let (renewing, member) = (renewing.clone(), member.clone());
                            Callback::from(move |_: MouseEvent| renewing.set(Some(member.clone())))
                        };
                        let delete = on_delete.reform({
                            let member = member.clone();
                            move |_: MouseEvent| member.clone()
                        });
                        html! {
                            <tr key={member.id.clone()}>
                                <td>{ &member.full_name }</td>
                                <td>{ &member.national_id }</td>
                                <td class="service-badges">
                                    { for service_statuses(&member, now).into_iter().map(|(category, status)| html! {
                                        <ServiceBadge {category} {status} />
                                    }) }
                                </td>
                                <td><MemberStatusBadge status={member_status(&member, now)} /></td>
                                <td class="row-actions">
                                    <Link<Route> to={Route::EditMember { id: member.id.clone() }} classes="btn-small">
                                        {"Editar"}
                                    </Link<Route>>
                                    <button type="button" class="btn-small" onclick={renew}>{"Renovar"}</button>
                                    <button type="button" class="btn-small btn-danger" onclick={delete}>{"Eliminar"}</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>

            if current.total_items == 0 {
                <p class="empty">{"No hay socios para este filtro."}</p>
            } else {
                <div class="pagination">
                    <button type="button" disabled={!current.has_previous()} onclick={go_to(current.page.saturating_sub(1))}>
                        {"Anterior"}
                    </button>
                    <span>
                        { format!("{}-{} de {} (página {} de {})",
                            current.first_index, current.last_index, current.total_items,
                            current.page, current.total_pages) }
                    </span>
                    <button type="button" disabled={!current.has_next()} onclick={go_to(current.page + 1)}>
                        {"Siguiente"}
                    </button>
                </div>
            }

            if let Some(member) = (*renewing).clone() {
                <RenewalModal {member} on_close={on_close_renewal} on_renewed={on_renewed} />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, name: &str) -> Member {
        Member {
            id: id.into(),
            full_name: name.into(),
            national_id: "30111222".into(),
            services: Default::default(),
        }
    }

    #[test]
    fn reducer_applies_server_copies() {
        let state = Rc::new(MemberListState::default());
        let state = state.reduce(MemberListAction::Loaded(vec![member("1", "Ana"), member("2", "Bruno")]));

        let state = state.reduce(MemberListAction::Renewed(member("2", "Bruno renovado")));
        let names: Vec<_> = state.members.as_ref().unwrap().iter().map(|m| m.full_name.clone()).collect();
        assert_eq!(names, vec!["Ana", "Bruno renovado"]);

        let state = state.reduce(MemberListAction::Removed("1".into()));
        assert_eq!(state.members.as_ref().unwrap().len(), 1);
    }
}
