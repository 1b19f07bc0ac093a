//! Pokémon Table Component
//!
//! Current page (or search result) as rows; clicking a row opens the
//! detail modal.

use leptos::prelude::*;

use pokedex_core::ListItem;

use crate::components::Pagination;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn PokemonTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let rows = move || {
        let session = store.search().read();
        session
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| (session.row_number(index), item.clone()))
            .collect::<Vec<(u32, ListItem)>>()
    };

    let table = move || {
        let (loading, error) = {
            let session = store.search().read();
            (session.is_loading(), session.error().map(str::to_string))
        };
        let loaded = *store.baseline_loaded().read();

        if loading || !loaded {
            return view! { <div class="loading">"Loading..."</div> }.into_any();
        }
        if let Some(message) = error {
            return view! { <div class="error">{message}</div> }.into_any();
        }

        view! {
            <div class="table-wrap">
                <table class="pokemon-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Name"</th>
                            <th>"URL"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=rows
                            key=|(number, item)| (*number, item.name.clone())
                            children=move |(number, item)| {
                                let url = item.url.clone();
                                let href = url.clone();
                                let name = item.name.clone();
                                view! {
                                    <tr class="pokemon-row" on:click=move |_| ctx.open_detail(item.clone())>
                                        <td>{number}</td>
                                        <td class="capitalize">{name}</td>
                                        <td>
                                            <a
                                                href=href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                on:click=|ev| ev.stop_propagation()
                                            >
                                                {url}
                                            </a>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        }
        .into_any()
    };

    view! {
        <section class="pokemon-list">
            {table}
            <Pagination />
        </section>
    }
}
