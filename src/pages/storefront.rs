use leptos::prelude::*;

use crate::components::category_bar::CategoryBar;
use crate::components::compare_bar::CompareBar;
use crate::components::comparison_modal::ComparisonModal;
use crate::components::filter_panel::FilterPanel;
use crate::components::hero_search::HeroSearch;
use crate::components::notice_stack::NoticeStack;
use crate::components::product_grid::ProductGrid;

#[component]
pub fn StorefrontPage() -> impl IntoView {
    view! {
        <div class="page storefront-page">
            <style>{include_str!("storefront.css")}</style>

            <HeroSearch />
            <CategoryBar />

            <div class="storefront-layout">
                <FilterPanel />
                <ProductGrid />
            </div>

            <CompareBar />
            <ComparisonModal />
            <NoticeStack />
        </div>
    }
}
