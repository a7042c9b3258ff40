use yew::prelude::*;

use crate::models::ServiceCategory;
use crate::viewmodels::{MemberStatus, ServiceStatus, TrafficLight};

#[derive(Properties, PartialEq)]
pub struct ServiceBadgeProps {
    pub category: ServiceCategory,
    pub status: ServiceStatus,
}

#[function_component]
pub fn ServiceBadge(props: &ServiceBadgeProps) -> Html {
    html! {
        <span class={classes!("badge", props.status.css_class())}>
            { format!("{}: {}", props.category.label(), props.status.label()) }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct MemberStatusBadgeProps {
    pub status: Option<MemberStatus>,
}

#[function_component]
pub fn MemberStatusBadge(props: &MemberStatusBadgeProps) -> Html {
    match props.status {
        Some(status) => {
            let class = match status {
                MemberStatus::ActiveFull => "status-ok",
                MemberStatus::ActivePartial => "status-grace",
                MemberStatus::Expired => "status-past-due",
            };
            html! { <span class={classes!("badge", "badge-member", class)}>{ status.label() }</span> }
        }
        None => html! { <span class="badge badge-muted">{"SIN SERVICIOS"}</span> },
    }
}

#[derive(Properties, PartialEq)]
pub struct TrafficLightBarProps {
    pub light: TrafficLight,
}

/// Barra verde/amarillo/rojo con porcentajes
#[function_component]
pub fn TrafficLightBar(props: &TrafficLightBarProps) -> Html {
    let (green, yellow, red) = props.light.percentages();
    if props.light.total() == 0 {
        return html! { <div class="traffic-light traffic-light-empty">{"Sin socios con servicios activos"}</div> };
    }

    let segment = |class: &'static str, pct: u32, count: u32| {
        html! {
            <div class={classes!("traffic-segment", class)} style={format!("width: {}%", pct)}>
                { format!("{} ({}%)", count, pct) }
            </div>
        }
    };

    html! {
        <div class="traffic-light">
            { segment("traffic-green", green, props.light.green) }
            { segment("traffic-yellow", yellow, props.light.yellow) }
            { segment("traffic-red", red, props.light.red) }
        </div>
    }
}
