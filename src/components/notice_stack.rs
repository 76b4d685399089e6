use leptos::prelude::*;

use crate::state::Msg;
use crate::store::Store;

#[component]
pub fn NoticeStack() -> impl IntoView {
    let store = expect_context::<Store>();
    let notices = move || store.with(|s| s.notices.active().to_vec());

    view! {
        <div class="notice-stack" aria-live="polite">
            <For
                each=notices
                key=|n| n.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.level.css() role="alert">
                            <span class="notice-message">{notice.message}</span>
                            <button
                                class="btn-close"
                                title="Dismiss"
                                on:click=move |_| store.dispatch(Msg::DismissNotice(id))
                            >
                                "x"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
