use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component]
pub fn NotFoundView() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"La página que buscás no existe."}</p>
            <Link<Route> to={Route::Login} classes="btn-primary">{"Volver al inicio"}</Link<Route>>
        </div>
    }
}
