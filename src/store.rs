use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use tracing::debug;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::debounce::set_timeout;
use crate::state::{Command, Msg, Storefront};

/// Handle every component gets from context: reads the storefront
/// context and dispatches messages into it.
#[derive(Clone, Copy)]
pub struct Store {
    state: RwSignal<Storefront>,
    config: StoredValue<AppConfig>,
    api: StoredValue<ApiClient, LocalStorage>,
}

impl Store {
    pub fn new(config: AppConfig, api: ApiClient) -> Self {
        Self {
            state: RwSignal::new(Storefront::new(&config)),
            config: StoredValue::new(config),
            api: StoredValue::new_local(api),
        }
    }

    /// Reactive read of the storefront context.
    pub fn with<T>(&self, f: impl FnOnce(&Storefront) -> T) -> T {
        self.state.with(f)
    }

    pub fn with_config<T>(&self, f: impl FnOnce(&AppConfig) -> T) -> T {
        self.config.with_value(f)
    }

    pub fn dispatch(&self, msg: Msg) {
        let config = self.config.get_value();
        let mut cmds = Vec::new();
        self.state.update(|state| {
            let (next, out) = std::mem::take(state).update(msg, &config);
            *state = next;
            cmds = out;
        });
        for cmd in cmds {
            self.run(cmd);
        }
    }

    fn run(&self, cmd: Command) {
        let store = *self;
        let api = self.api.get_value();

        match cmd {
            Command::FetchProducts(filters) => spawn_local(async move {
                let msg = match api.list_products(&filters).await {
                    Ok(products) => Msg::ProductsLoaded(products),
                    Err(e) => Msg::ProductsFailed(e),
                };
                store.dispatch(msg);
            }),
            Command::FetchBrands(category) => spawn_local(async move {
                let msg = match api.list_brands(category.as_deref()).await {
                    Ok(brands) => Msg::BrandsLoaded(brands),
                    Err(e) => Msg::BrandsFailed(e),
                };
                store.dispatch(msg);
            }),
            Command::FetchCategories => spawn_local(async move {
                let msg = match api.list_categories().await {
                    Ok(categories) => Msg::CategoriesLoaded(categories),
                    Err(e) => Msg::CategoriesFailed(e),
                };
                store.dispatch(msg);
            }),
            Command::Compare(ids) => spawn_local(async move {
                let msg = match api.compare(&ids).await {
                    Ok(comparison) => Msg::ComparisonLoaded(comparison),
                    Err(e) => Msg::ComparisonFailed(e),
                };
                store.dispatch(msg);
            }),
            Command::ScheduleDismiss(id) => {
                let delay = self.with_config(|c| c.notice_duration_ms);
                set_timeout(delay, move || store.dispatch(Msg::DismissNotice(id)));
            }
            Command::ScrollToProducts => scroll_to("products"),
        }
    }
}

fn scroll_to(element_id: &str) {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
    else {
        debug!("No #{} to scroll to", element_id);
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}
