//! Search Bar Component
//!
//! Name lookup form with an inline clear button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let search_text = move || store.search().read().search_text().to_string();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let query = store.search().read_untracked().search_text().to_string();
        ctx.search(query);
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <div class="search-input-wrap">
                <input
                    type="text"
                    name="name"
                    class="search-input"
                    placeholder="Search by name"
                    prop:value=search_text
                    on:input=move |ev| ctx.set_search_text(event_target_value(&ev))
                />
                <Show when=move || !search_text().is_empty()>
                    <button
                        type="button"
                        class="search-clear-btn"
                        aria-label="Clear"
                        on:click=move |_| ctx.clear_search()
                    >
                        "×"
                    </button>
                </Show>
            </div>
            <button type="submit" class="search-btn">"Search"</button>
        </form>
    }
}
