//! Item Editor Component
//!
//! Name and price inputs for one menu item.

use leptos::prelude::*;

use crate::pricing::format_yen;
use crate::store::{
    store_computed_item, store_item, store_set_item_name, store_set_item_price, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn ItemEditor(item_id: u32, index: usize) -> impl IntoView {
    let store = use_app_store();

    let name = move || store_item(&store, item_id).map(|i| i.name).unwrap_or_default();
    let price = move || store_item(&store, item_id).map(|i| i.price).unwrap_or_default();
    let tax_note = move || {
        store_computed_item(&store, item_id)
            .map(|i| format!("税込 {}円", format_yen(i.tax_included)))
            .unwrap_or_default()
    };
    let hidden = move || index >= store.item_count().get().get();

    view! {
        <fieldset class=move || if hidden() { "item-editor inactive" } else { "item-editor" }>
            <legend>{format!("メニュー {}", index + 1)}</legend>
            <label>
                "名前"
                <input
                    type="text"
                    prop:value=name
                    on:input=move |ev| store_set_item_name(&store, item_id, event_target_value(&ev))
                    placeholder="メニュー名"
                />
            </label>
            <label>
                "価格（税抜）"
                <input
                    type="text"
                    inputmode="numeric"
                    prop:value=price
                    on:input=move |ev| store_set_item_price(&store, item_id, &event_target_value(&ev))
                    placeholder="0"
                />
            </label>
            <p class="tax-note">{tax_note}</p>
        </fieldset>
    }
}
