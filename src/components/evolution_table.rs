//! Evolution Trigger Table Component
//!
//! Small table paged with Prev/Next buttons, independent of the URL.

use leptos::prelude::*;

use pokedex_core::ListItem;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn EvolutionTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let content = move || {
        let (loading, error, rows) = {
            let session = store.evolution().read();
            let rows = session
                .items()
                .iter()
                .enumerate()
                .map(|(index, item)| (session.row_number(index), item.clone()))
                .collect::<Vec<(u32, ListItem)>>();
            (session.is_loading(), session.error().map(str::to_string), rows)
        };

        if loading {
            return view! { <p class="loading">"Loading..."</p> }.into_any();
        }
        if let Some(message) = error {
            return view! { <p class="error">{message}</p> }.into_any();
        }

        view! {
            <div class="table-wrap">
                <table class="evolution-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Name"</th>
                            <th>"URL"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|(number, item)| {
                                let url = item.url.clone();
                                let href = url.clone();
                                view! {
                                    <tr>
                                        <td>{number}</td>
                                        <td class="capitalize">{item.name}</td>
                                        <td>
                                            <a href=href target="_blank" rel="noopener noreferrer">
                                                {url}
                                            </a>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        }
        .into_any()
    };

    let go_previous = move |_: leptos::ev::MouseEvent| {
        let target = store.evolution().read_untracked().previous_page();
        if let Some(page) = target {
            ctx.load_evolution_page(page);
        }
    };
    let go_next = move |_: leptos::ev::MouseEvent| {
        let target = store.evolution().read_untracked().next_page();
        if let Some(page) = target {
            ctx.load_evolution_page(page);
        }
    };

    view! {
        <section class="evolution-triggers">
            <h2>"Evolution Triggers"</h2>
            {content}
            <div class="evolution-pagination">
                <button
                    class="page-nav"
                    disabled=move || store.evolution().read().previous_page().is_none()
                    on:click=go_previous
                >
                    "Prev"
                </button>
                <span class="page-status">
                    {move || {
                        let pager = store.evolution().read().pager();
                        format!("Page {} / {}", pager.page(), pager.page_count())
                    }}
                </span>
                <button
                    class="page-nav"
                    disabled=move || store.evolution().read().next_page().is_none()
                    on:click=go_next
                >
                    "Next"
                </button>
            </div>
        </section>
    }
}
