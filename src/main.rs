use gym_admin::config::CONFIG;
use gym_admin::{App, AppProps, SessionStore};

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Gym Admin starting ({})", CONFIG.environment);
    log::debug!("Backend: {}", CONFIG.backend_url());

    let session = SessionStore::browser();
    session.restore();

    yew::Renderer::<App>::with_props(AppProps { session }).render();
}
