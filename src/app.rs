use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use tracing::{error, info};

use crate::api::ApiClient;
use crate::components::navbar::Navbar;
use crate::config::AppConfig;
use crate::error::{PulseError, Result};
use crate::pages::not_found::NotFoundPage;
use crate::pages::storefront::StorefrontPage;
use crate::state::Msg;
use crate::store::Store;

/// An empty `api_base` means the backend is served from the page's origin.
fn resolve_api_base(config: &AppConfig) -> Result<String> {
    if !config.api_base.is_empty() {
        return Ok(config.api_base.clone());
    }
    web_sys::window()
        .ok_or_else(|| PulseError::Config("no window".to_string()))?
        .location()
        .origin()
        .map_err(|e| PulseError::Config(format!("cannot read page origin: {:?}", e)))
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let api = match resolve_api_base(&config).and_then(|base| ApiClient::new(&base)) {
        Ok(api) => api,
        Err(e) => {
            error!("Cannot start storefront: {}", e);
            return view! {
                <div class="page startup-error">
                    <h2>"PricePulse could not start"</h2>
                    <p class="page-description">{e.to_string()}</p>
                </div>
            }
            .into_any();
        }
    };
    info!("Storefront backend at {}", api.base());

    let store = Store::new(config, api);
    provide_context(store);

    // Initial load of products, brands and categories
    Effect::new(move |_| store.dispatch(Msg::Init));

    view! {
        <Router>
            <div class="app-layout">
                <Navbar />
                <main class="content">
                    <Routes fallback=NotFoundPage>
                        <Route path=path!("/") view=StorefrontPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
    .into_any()
}
