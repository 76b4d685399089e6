use leptos::prelude::*;

use crate::selection::{SelectionState, MAX_COMPARE};
use crate::state::Msg;
use crate::store::Store;

/// Floating bar listing the products picked for comparison.
#[component]
pub fn CompareBar() -> impl IntoView {
    let store = expect_context::<Store>();

    let visible = move || store.with(|s| s.selection.state() == SelectionState::Selecting);
    let count = move || store.with(|s| s.selection.len());
    let can_compare = move || store.with(|s| s.selection.can_compare());
    let comparing = move || store.with(|s| s.comparing);
    let names = move || {
        store.with(|s| {
            s.selection
                .items()
                .iter()
                .map(|p| p.key().to_string())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Show when=visible>
            <div class="compare-bar">
                <span class="compare-count">
                    {move || format!("{} / {} selected", count(), MAX_COMPARE)}
                </span>
                <ul class="compare-items">
                    <For
                        each=names
                        key=|n| n.clone()
                        children=move |name| {
                            let label = name.clone();
                            view! {
                                <li class="compare-item">
                                    <span>{label}</span>
                                    <button
                                        class="btn-remove"
                                        title="Remove"
                                        on:click=move |_| {
                                            store.dispatch(Msg::RemoveFromComparison(name.clone()))
                                        }
                                    >
                                        "x"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
                <button
                    class="btn btn-primary"
                    disabled=move || !can_compare() || comparing()
                    on:click=move |_| store.dispatch(Msg::RequestComparison)
                >
                    {move || if comparing() { "Comparing..." } else { "Compare" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| store.dispatch(Msg::ClearComparison)>
                    "Clear"
                </button>
            </div>
        </Show>
    }
}
