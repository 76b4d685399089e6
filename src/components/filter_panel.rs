use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

use crate::debounce::Debouncer;
use crate::filters::SORT_OPTIONS;
use crate::state::Msg;
use crate::store::Store;

/// Values picked in a `<select multiple>`, in option order.
fn selected_values(select: &HtmlSelectElement) -> Vec<String> {
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|opt| opt.value())
        .collect()
}

#[component]
pub fn FilterPanel() -> impl IntoView {
    let store = expect_context::<Store>();
    let (search_delay, price_delay) =
        store.with_config(|c| (c.search_debounce_ms, c.price_debounce_ms));

    let search_debounce = Debouncer::new(search_delay);
    let min_debounce = Debouncer::new(price_delay);
    let max_debounce = Debouncer::new(price_delay);

    // Price inputs keep what was typed; the filter only keeps the parsed bound
    let (min_raw, set_min_raw) = signal(String::new());
    let (max_raw, set_max_raw) = signal(String::new());

    let search = move || store.with(|s| s.filters.search.clone());
    let sort = move || store.with(|s| s.filters.sort.clone());
    let brands = move || store.with(|s| s.brands.clone());

    let clear_filters = move |_| {
        search_debounce.cancel();
        min_debounce.cancel();
        max_debounce.cancel();
        set_min_raw.set(String::new());
        set_max_raw.set(String::new());
        store.dispatch(Msg::ClearFilters);
    };

    view! {
        <aside class="filter-panel">
            <h3 class="filter-title">"Filters"</h3>

            <div class="filter-group">
                <label class="filter-label">"Search"</label>
                <input
                    type="text"
                    id="searchInput"
                    class="search-input"
                    placeholder="Search products..."
                    prop:value=search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        search_debounce.call(move || store.dispatch(Msg::SetSearch(value)));
                    }
                />
            </div>

            <div class="filter-group">
                <label class="filter-label">"Sort by"</label>
                <select
                    class="filter-select"
                    prop:value=sort
                    on:change=move |ev| store.dispatch(Msg::SetSort(event_target_value(&ev)))
                >
                    {SORT_OPTIONS
                        .iter()
                        .map(|(value, label)| {
                            view! { <option value=*value>{*label}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <div class="filter-group">
                <label class="filter-label">"Brands"</label>
                <select
                    multiple=true
                    class="filter-select brand-filter"
                    on:change=move |ev| {
                        let select = event_target::<HtmlSelectElement>(&ev);
                        store.dispatch(Msg::SetBrands(selected_values(&select)));
                    }
                >
                    <For
                        each=brands
                        key=|b| b.clone()
                        children=move |brand| {
                            let value = brand.clone();
                            let for_selected = brand.clone();
                            view! {
                                <option
                                    value=value
                                    prop:selected=move || {
                                        store.with(|s| s.filters.brands.contains(&for_selected))
                                    }
                                >
                                    {brand}
                                </option>
                            }
                        }
                    />
                </select>
            </div>

            <div class="filter-group price-range">
                <label class="filter-label">"Price range"</label>
                <div class="price-inputs">
                    <input
                        type="number"
                        min="0"
                        class="price-input"
                        placeholder="Min"
                        prop:value=move || min_raw.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_min_raw.set(value.clone());
                            min_debounce.call(move || store.dispatch(Msg::SetMinPrice(value)));
                        }
                    />
                    <span class="price-separator">"-"</span>
                    <input
                        type="number"
                        min="0"
                        class="price-input"
                        placeholder="Max"
                        prop:value=move || max_raw.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_max_raw.set(value.clone());
                            max_debounce.call(move || store.dispatch(Msg::SetMaxPrice(value)));
                        }
                    />
                </div>
            </div>

            <div class="filter-actions">
                <button class="btn btn-primary" on:click=move |_| store.dispatch(Msg::ApplyFilters)>
                    "Apply"
                </button>
                <button
                    class="btn btn-secondary"
                    disabled=move || store.with(|s| s.filters.is_default())
                    on:click=clear_filters
                >
                    "Clear filters"
                </button>
            </div>
        </aside>
    }
}
