//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{default_items, ComputedMenuItem, ItemCount, MenuItem};
use crate::pricing::sanitize_price;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Editable menu items (fixed set of two)
    pub items: Vec<MenuItem>,
    /// How many items the page shows
    pub item_count: ItemCount,
    /// Accent color applied as text shadow
    pub shadow_color: String,
}

impl AppState {
    pub fn new(shadow_color: &str) -> Self {
        Self {
            items: default_items(),
            item_count: ItemCount::default(),
            shadow_color: shadow_color.to_string(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Item by ID (tracked)
pub fn store_item(store: &AppStore, item_id: u32) -> Option<MenuItem> {
    store.items().read().iter().find(|item| item.id == item_id).cloned()
}

/// Computed item by ID (tracked)
pub fn store_computed_item(store: &AppStore, item_id: u32) -> Option<ComputedMenuItem> {
    store.items().read().iter().find(|item| item.id == item_id).map(MenuItem::computed)
}

/// IDs of the items the page renders, in order (tracked)
pub fn store_visible_ids(store: &AppStore) -> Vec<u32> {
    let count = store.item_count().get().get();
    store.items().read().iter().take(count).map(|item| item.id).collect()
}

/// Set an item's display name
pub fn store_set_item_name(store: &AppStore, item_id: u32, name: String) {
    if let Some(item) = store.items().write().iter_mut().find(|item| item.id == item_id) {
        item.name = name;
    }
}

/// Set an item's price, keeping digits only
pub fn store_set_item_price(store: &AppStore, item_id: u32, raw: &str) {
    if let Some(item) = store.items().write().iter_mut().find(|item| item.id == item_id) {
        item.price = sanitize_price(raw);
    }
}

pub fn store_set_item_count(store: &AppStore, count: ItemCount) {
    store.item_count().set(count);
}

pub fn store_set_shadow_color(store: &AppStore, color: String) {
    store.shadow_color().set(color);
}
