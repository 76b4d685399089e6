use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <a href="/" class="navbar-brand">
                <span class="navbar-title">"PricePulse"</span>
                <span class="navbar-subtitle">"Amazon vs Flipkart"</span>
            </a>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="#hero" class="nav-link">"Home"</a>
                </li>
                <li class="nav-item">
                    <a href="#products" class="nav-link">"Products"</a>
                </li>
            </ul>
        </nav>
    }
}
