use leptos::prelude::*;

use crate::state::Msg;
use crate::store::Store;

#[component]
pub fn CategoryBar() -> impl IntoView {
    let store = expect_context::<Store>();

    let categories = move || store.with(|s| s.categories.clone());
    let active = move || store.with(|s| s.filters.category.clone());

    view! {
        <div class="category-bar">
            <For
                each=categories
                key=|c| c.clone()
                children=move |category| {
                    let label = category.clone();
                    let for_class = category.clone();
                    view! {
                        <button
                            class="category-btn"
                            class:active=move || active() == for_class
                            on:click=move |_| store.dispatch(Msg::SetCategory(category.clone()))
                        >
                            {label}
                        </button>
                    }
                }
            />
        </div>
    }
}
