//! Item Count Selector Component
//!
//! Buttons choosing whether the page shows one or two items.

use leptos::prelude::*;

use crate::models::ItemCount;
use crate::store::{store_set_item_count, use_app_store, AppStateStoreFields};

#[component]
pub fn ItemCountSelector() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="type-selector">
            {ItemCount::ALL.into_iter().map(|count| {
                let is_selected = move || store.item_count().get() == count;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "type-btn active" } else { "type-btn" }
                        on:click=move |_| store_set_item_count(&store, count)
                    >
                        {count.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
