// ============================================================================
// ROUTE GUARD - Rutas solo públicas y rutas protegidas
// ============================================================================
// Mientras la sesión está en `Initializing` no se renderiza nada ni se
// redirige. Los guards se suscriben a la sesión: un logout en cualquier
// parte reemplaza la vista protegida por la redirección.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session;
use crate::router::Route;
use crate::state::SessionPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardKind {
    /// Login/registro: un admin logueado va directo al dashboard
    PublicOnly,
    /// Backoffice: requiere sesión
    Protected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Pending,
    Redirect(Route),
    Render,
}

pub fn evaluate_guard(kind: GuardKind, phase: SessionPhase) -> GuardOutcome {
    match (kind, phase) {
        (_, SessionPhase::Initializing) => GuardOutcome::Pending,
        (GuardKind::PublicOnly, SessionPhase::Authenticated) => GuardOutcome::Redirect(Route::Dashboard),
        (GuardKind::PublicOnly, SessionPhase::Anonymous) => GuardOutcome::Render,
        (GuardKind::Protected, SessionPhase::Anonymous) => GuardOutcome::Redirect(Route::Login),
        (GuardKind::Protected, SessionPhase::Authenticated) => GuardOutcome::Render,
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub children: Children,
}

#[function_component]
pub fn PublicRoute(props: &GuardProps) -> Html {
    let session = use_session();
    render_guarded(GuardKind::PublicOnly, session.session.phase, &props.children)
}

#[function_component]
pub fn PrivateRoute(props: &GuardProps) -> Html {
    let session = use_session();
    render_guarded(GuardKind::Protected, session.session.phase, &props.children)
}

fn render_guarded(kind: GuardKind, phase: SessionPhase, children: &Children) -> Html {
    match evaluate_guard(kind, phase) {
        GuardOutcome::Pending => html! {},
        GuardOutcome::Redirect(to) => {
            log::debug!("[ROUTER] {:?} en {:?} -> {}", kind, phase, to.to_path());
            html! { <Redirect<Route> to={to} /> }
        }
        GuardOutcome::Render => html! { <>{ children.clone() }</> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::error::AppError;
    use crate::models::AdminProfile;
    use crate::services::reconcile_session;
    use crate::state::{SessionStore, Subscription};
    use crate::utils::MemoryStorage;

    #[test]
    fn initializing_is_pending_for_both_guards() {
        assert_eq!(evaluate_guard(GuardKind::PublicOnly, SessionPhase::Initializing), GuardOutcome::Pending);
        assert_eq!(evaluate_guard(GuardKind::Protected, SessionPhase::Initializing), GuardOutcome::Pending);
    }

    #[test]
    fn anonymous_sees_public_and_is_sent_to_login_from_protected() {
        assert_eq!(evaluate_guard(GuardKind::PublicOnly, SessionPhase::Anonymous), GuardOutcome::Render);
        assert_eq!(
            evaluate_guard(GuardKind::Protected, SessionPhase::Anonymous),
            GuardOutcome::Redirect(Route::Login)
        );
    }

    #[test]
    fn authenticated_skips_login_and_sees_protected() {
        assert_eq!(
            evaluate_guard(GuardKind::PublicOnly, SessionPhase::Authenticated),
            GuardOutcome::Redirect(Route::Dashboard)
        );
        assert_eq!(evaluate_guard(GuardKind::Protected, SessionPhase::Authenticated), GuardOutcome::Render);
    }

    /// Mismo camino que `use_session`: cada snapshot notificado pasa por el guard
    fn follow_guard(store: &SessionStore, kind: GuardKind) -> (Rc<RefCell<Vec<GuardOutcome>>>, Subscription) {
        let seen = Rc::new(RefCell::new(vec![evaluate_guard(kind, store.phase())]));
        let sink = seen.clone();
        let subscription = store.subscribe(move |session| {
            sink.borrow_mut().push(evaluate_guard(kind, session.phase));
        });
        (seen, subscription)
    }

    #[test]
    fn logout_moves_protected_view_to_login_redirect() {
        let store = SessionStore::new(MemoryStorage::new());
        let (seen, _subscription) = follow_guard(&store, GuardKind::Protected);

        store.restore();
        store.login(AdminProfile::from_username("ana"), "jwt.1".into()).unwrap();
        store.logout();

        assert_eq!(
            *seen.borrow(),
            vec![
                GuardOutcome::Pending,
                GuardOutcome::Redirect(Route::Login),
                GuardOutcome::Render,
                GuardOutcome::Redirect(Route::Login),
            ]
        );
    }

    #[test]
    fn unauthorized_response_redirects_protected_view() {
        let store = SessionStore::new(MemoryStorage::new());
        store.restore();
        store.login(AdminProfile::from_username("ana"), "jwt.1".into()).unwrap();
        let (seen, _subscription) = follow_guard(&store, GuardKind::Protected);

        assert!(reconcile_session(&store, &AppError::Unauthorized("token vencido".into())));
        assert_eq!(
            *seen.borrow(),
            vec![GuardOutcome::Render, GuardOutcome::Redirect(Route::Login)]
        );
    }

    #[test]
    fn login_moves_public_view_to_dashboard() {
        let store = SessionStore::new(MemoryStorage::new());
        store.restore();
        let (seen, _subscription) = follow_guard(&store, GuardKind::PublicOnly);

        store.login(AdminProfile::from_username("ana"), "jwt.1".into()).unwrap();
        assert_eq!(
            seen.borrow().last(),
            Some(&GuardOutcome::Redirect(Route::Dashboard))
        );
    }
}
