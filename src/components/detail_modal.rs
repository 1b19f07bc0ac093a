//! Detail Modal Component
//!
//! Overlay dialog for the clicked row. Only rendered while the modal
//! session is open; a response that lands after closing stays hidden.

use leptos::prelude::*;

use pokedex_core::session::capitalize;
use pokedex_core::ItemDetail;

use crate::components::StarRating;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn DetailModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        {move || {
            let (is_open, title, loading, detail, failure) = {
                let modal = store.modal().read();
                (
                    modal.is_open(),
                    modal.title().to_string(),
                    modal.is_loading(),
                    modal.visible_detail().cloned(),
                    modal.failure(),
                )
            };
            if !is_open {
                return view! { <div></div> }.into_any();
            }

            let body = if loading {
                view! { <div class="loading">"Loading..."</div> }.into_any()
            } else if let Some(detail) = detail {
                view! { <DetailCard detail=detail /> }.into_any()
            } else {
                let message = failure.map(|f| f.message()).unwrap_or("Not found.");
                view! { <div class="not-found">{message}</div> }.into_any()
            };

            view! {
                <div class="modal-backdrop" on:click=move |_| ctx.close_detail()>
                    <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                        <div class="modal-header">
                            <span class="modal-title">{title}</span>
                            <button
                                type="button"
                                class="close-btn"
                                aria-label="Close"
                                on:click=move |_| ctx.close_detail()
                            >
                                "×"
                            </button>
                        </div>
                        <div class="modal-body">{body}</div>
                    </div>
                </div>
            }
            .into_any()
        }}
    }
}

#[component]
fn DetailCard(detail: ItemDetail) -> impl IntoView {
    let sprite = detail.sprite_url.clone().map(|src| {
        view! { <img class="sprite" src=src alt=detail.name.clone() width="96" height="96" /> }
    });

    view! {
        <div class="detail-card">
            <h2 class="detail-name">{capitalize(&detail.name)}" #"{detail.id}</h2>
            {sprite}
            <div><strong>"Height: "</strong>{detail.height}</div>
            <div><strong>"Weight: "</strong>{detail.weight}</div>
            <div><strong>"Types: "</strong>{detail.types.join(", ")}</div>
            <div><strong>"Abilities: "</strong>{detail.abilities.join(", ")}</div>
            <div>
                <strong>"Base experience: "</strong>
                {detail.base_experience}
                " "
                <StarRating base_experience=detail.base_experience />
            </div>
        </div>
    }
}
