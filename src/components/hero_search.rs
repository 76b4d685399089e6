use leptos::prelude::*;

use crate::state::Msg;
use crate::store::Store;

/// Secondary search field at the top of the page. Enter (or the button)
/// replaces the primary search and scrolls down to the results.
#[component]
pub fn HeroSearch() -> impl IntoView {
    let store = expect_context::<Store>();
    let (query, set_query) = signal(String::new());

    let submit = move || store.dispatch(Msg::HeroSearch(query.get_untracked()));

    view! {
        <section id="hero" class="hero">
            <h1 class="hero-title">"Find the best price, every time"</h1>
            <p class="hero-subtitle">
                "Compare Amazon and Flipkart prices side by side before you buy."
            </p>
            <div class="hero-search">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search phones, laptops, headphones..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                    on:keypress=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
                <button class="btn btn-primary" on:click=move |_| submit()>
                    "Search"
                </button>
            </div>
        </section>
    }
}
