// ============================================================================
// USE SESSION HOOK - Sesión compartida vía Context de Yew
// ============================================================================
// El provider recibe el SessionStore ya restaurado en main.rs y lo expone
// junto con el ApiClient. Cada componente que usa el hook se suscribe al
// store y se vuelve a renderizar en cada login/logout.
// ============================================================================

use yew::prelude::*;

use crate::services::ApiClient;
use crate::state::{Session, SessionStore};

#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub store: SessionStore,
    pub api: ApiClient,
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub store: SessionStore,
    pub children: Children,
}

#[function_component]
pub fn SessionProvider(props: &SessionProviderProps) -> Html {
    let context = use_memo(props.store.clone(), |store| SessionContext {
        store: store.clone(),
        api: ApiClient::new(store.clone()),
    });

    html! {
        <ContextProvider<SessionContext> context={(*context).clone()}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[derive(Clone)]
pub struct UseSessionHandle {
    pub store: SessionStore,
    pub api: ApiClient,
    /// Foto de la sesión en el último render
    pub session: Session,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let context = use_context::<SessionContext>()
        .expect("use_session() debe usarse dentro de <SessionProvider>");
    let snapshot = use_state_eq(|| context.store.session());

    {
        let snapshot = snapshot.clone();
        use_effect_with(context.store.clone(), move |store| {
            // Cambios entre el render y el efecto
            snapshot.set(store.session());
            let subscription = store.subscribe(move |session| snapshot.set(session.clone()));
            move || drop(subscription)
        });
    }

    let logout = {
        let store = context.store.clone();
        Callback::from(move |_| store.logout())
    };

    UseSessionHandle {
        store: context.store,
        api: context.api,
        session: (*snapshot).clone(),
        logout,
    }
}
