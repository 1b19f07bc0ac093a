use leptos::prelude::*;

use crate::routes::HOME_HREF;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <a class="app-title" href=HOME_HREF>
                <h1>"Pokémon List"</h1>
            </a>
        </header>
    }
}
