//! Menu Page Component
//!
//! Contents of the A4 page: one row per visible item.

use leptos::prelude::*;

use crate::components::AutoFitText;
use crate::pricing::format_yen;
use crate::store::{store_computed_item, store_visible_ids, use_app_store, AppStateStoreFields};

/// CSS text-shadow for the accent color
fn shadow_css(color: &str) -> String {
    format!("0.05em 0.05em 0 {}", color)
}

/// Price line shown under the name
fn price_label(price: u64, tax_included: u64) -> String {
    format!("{}円（税込{}円）", format_yen(price), format_yen(tax_included))
}

#[component]
pub fn MenuPage() -> impl IntoView {
    let store = use_app_store();
    let visible_ids = Memo::new(move |_| store_visible_ids(&store));

    view! {
        <div
            class=move || format!("menu-page-body items-{}", visible_ids.get().len())
            style:text-shadow=move || shadow_css(&store.shadow_color().get())
        >
            <For
                each=move || visible_ids.get()
                key=|id| *id
                children=move |id| view! { <MenuRow item_id=id /> }
            />
        </div>
    }
}

/// A single item: auto-fitted name over auto-fitted price
#[component]
fn MenuRow(item_id: u32) -> impl IntoView {
    let store = use_app_store();
    let item = Memo::new(move |_| store_computed_item(&store, item_id));

    let name = Signal::derive(move || item.get().map(|i| i.name).unwrap_or_default());
    let price = Signal::derive(move || {
        item.get()
            .map(|i| price_label(i.price, i.tax_included))
            .unwrap_or_default()
    });

    view! {
        <section class="menu-row">
            <AutoFitText text=name class="menu-row-name" />
            <AutoFitText text=price class="menu-row-price" />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_label() {
        assert_eq!(price_label(980, 1078), "980円（税込1,078円）");
        assert_eq!(price_label(0, 0), "0円（税込0円）");
    }

    #[test]
    fn test_shadow_css() {
        assert_eq!(shadow_css("#ff8c00"), "0.05em 0.05em 0 #ff8c00");
    }
}
