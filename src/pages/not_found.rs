use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page not-found-page">
            <h2>"Page not found"</h2>
            <p class="page-description">"There is nothing at this address."</p>
            <a href="/" class="btn btn-primary">"Back to products"</a>
        </div>
    }
}
