use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::store::Store;
use crate::view_model::{results_label, GridView, NO_RESULTS_HINT, NO_RESULTS_TITLE};

#[component]
pub fn ProductGrid() -> impl IntoView {
    let store = expect_context::<Store>();

    let grid = Memo::new(move |_| store.with_config(|config| store.with(|s| s.grid(config))));
    let loading = move || store.with(|s| s.loading);
    let has_results = move || grid.with(|g| matches!(g, GridView::Cards(_)));
    let cards = move || match grid.get() {
        GridView::Cards(cards) => cards,
        GridView::NoResults => Vec::new(),
    };

    view! {
        <section id="products" class="products-section">
            <div class="results-header">
                <h2 class="results-count">{move || results_label(grid.with(GridView::len))}</h2>
                <Show when=loading>
                    <div class="spinner" role="status">
                        <span class="visually-hidden">"Loading..."</span>
                    </div>
                </Show>
            </div>

            <Show
                when=has_results
                fallback=|| {
                    view! {
                        <div class="no-results">
                            <h3>{NO_RESULTS_TITLE}</h3>
                            <p>{NO_RESULTS_HINT}</p>
                        </div>
                    }
                }
            >
                <div class="product-grid">
                    <For
                        each=cards
                        key=|card| card.render_key()
                        children=|card| view! { <ProductCard card=card /> }
                    />
                </div>
            </Show>
        </section>
    }
}
