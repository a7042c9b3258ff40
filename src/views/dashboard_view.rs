use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Notice, Notification, TrafficLightBar};
use crate::hooks::{use_mounted, use_session};
use crate::models::{DashboardStats, ServiceCategory};
use crate::router::Route;
use crate::services::reconcile_session;
use crate::viewmodels::{MemberFilter, MemberListQuery, TrafficLight};

struct StatCard {
    icon: &'static str,
    title: &'static str,
    value: String,
    /// Filtro del listado al hacer click; `None` para tarjetas informativas
    filter: Option<MemberFilter>,
}

fn stat_cards(stats: &DashboardStats) -> Vec<StatCard> {
    let card = |icon: &'static str, title: &'static str, value: u32, filter: Option<MemberFilter>| {
        StatCard { icon, title, value: value.to_string(), filter }
    };
    vec![
        card("👥", "Socios totales", stats.total, Some(MemberFilter::All)),
        card("✅", "Activos", stats.activos, Some(MemberFilter::UpToDate)),
        card("🏋️", "Gym", stats.activos_gym, Some(MemberFilter::Service(ServiceCategory::Gym))),
        card("🏊", "Natación", stats.activos_natacion, Some(MemberFilter::Service(ServiceCategory::Natacion))),
        card("🧒", "Kids", stats.activos_kids, Some(MemberFilter::Service(ServiceCategory::Kids))),
        card("🎓", "Profe", stats.activos_profe, Some(MemberFilter::Service(ServiceCategory::Profe))),
        card("⏳", "Cuotas parciales", stats.cuotas_parciales, Some(MemberFilter::Partial)),
        card("⛔", "Vencidos", stats.total_vencidos, Some(MemberFilter::PastDue)),
        card("🚪", "Ingresos hoy", stats.ingresos_hoy, None),
        StatCard {
            icon: "💰",
            title: "Monto pendiente",
            value: format!("$ {:.0}", stats.monto_pendiente),
            filter: Some(MemberFilter::Partial),
        },
    ]
}

#[function_component]
pub fn DashboardView() -> Html {
    let session = use_session();
    let mounted = use_mounted();
    let navigator = use_navigator();
    let stats = use_state(|| None::<DashboardStats>);
    let notice = use_state(|| None::<Notice>);

    {
        let (api, store) = (session.api.clone(), session.store.clone());
        let (stats, notice) = (stats.clone(), notice.clone());
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = api.stats().await;
                if !mounted.is_mounted() {
                    return;
                }
                match result {
                    Ok(s) => stats.set(Some(s)),
                    Err(err) => {
                        reconcile_session(&store, &err);
                        notice.set(Some(Notice::from_error(&err)));
                    }
                }
            });
            || ()
        });
    }

    let open_list = Callback::from(move |filter: MemberFilter| {
        let Some(navigator) = &navigator else {
            return;
        };
        if let Err(e) = navigator.push_with_query(&Route::Members, &MemberListQuery::for_filter(filter)) {
            log::error!("❌ [ROUTER] {}", e);
        }
    });

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    let body = match &*stats {
        None => html! { <p class="loading">{"Cargando estadísticas..."}</p> },
        Some(s) => html! {
            <>
                <div class="stat-grid">
                    { for stat_cards(s).into_iter().map(|card| {
                        let onclick = card.filter.map(|f| open_list.reform(move |_: MouseEvent| f));
                        let clickable = onclick.is_some().then_some("clickable");
                        html! {
                            <div class={classes!("stat-card", clickable)} onclick={onclick}>
                                <span class="stat-icon">{ card.icon }</span>
                                <span class="stat-value">{ card.value }</span>
                                <span class="stat-title">{ card.title }</span>
                            </div>
                        }
                    }) }
                </div>
                <h2>{"Semáforo de socios"}</h2>
                <TrafficLightBar light={TrafficLight::from(&s.semaforo)} />
            </>
        },
    };

    html! {
        <div class="dashboard">
            <h1>{"Dashboard"}</h1>
            <Notification notice={(*notice).clone()} on_close={on_dismiss} />
            { body }
        </div>
    }
}
