//! Pagination Component
//!
//! Page-number links for the Pokémon table. Hidden for name-filtered
//! page loads and while a search result replaces the page.

use leptos::prelude::*;

use pokedex_core::{PageLink, Pager};

use crate::context::use_app_context;
use crate::routes::page_href;
use crate::store::AppStateStoreFields;

#[component]
pub fn Pagination() -> impl IntoView {
    let store = use_app_context().store;

    move || {
        let filtered = !store.filter_name().read().is_empty();
        let (pager, showing_baseline) = {
            let session = store.search().read();
            (session.pager(), session.is_showing_baseline())
        };

        if filtered || !showing_baseline || pager.page_count() == 0 {
            return view! { <div></div> }.into_any();
        }

        view! {
            <nav class="pagination">
                {nav_link(pager.has_previous(), pager.previous_page(), "Previous")}
                {page_numbers(&pager)}
                {nav_link(pager.has_next(), pager.next_page(), "Next")}
            </nav>
        }
        .into_any()
    }
}

fn nav_link(enabled: bool, target: u32, label: &'static str) -> AnyView {
    if enabled {
        view! { <a class="page-nav" href=page_href(target)>{label}</a> }.into_any()
    } else {
        view! { <span class="page-nav disabled" aria-disabled="true">{label}</span> }.into_any()
    }
}

fn page_numbers(pager: &Pager) -> impl IntoView {
    pager
        .links()
        .into_iter()
        .map(|link| match link {
            PageLink::Page { number, current } => {
                let class = if current { "page-link active" } else { "page-link" };
                view! { <a class=class href=page_href(number)>{number}</a> }.into_any()
            }
            PageLink::Ellipsis => view! { <span class="page-ellipsis">"..."</span> }.into_any(),
        })
        .collect_view()
}
