//! Shadow Color Picker Component
//!
//! Color input plus swatches of recently used colors. The accent updates
//! live; history commits are debounced and flushed on blur or when a
//! swatch is picked.

use leptos::prelude::*;

use crate::color_history::normalize_color;
use crate::config::COLOR_COMMIT_DEBOUNCE_MS;
use crate::context::use_app_context;
use crate::debounce::Debounced;
use crate::store::{store_set_shadow_color, use_app_store, AppStateStoreFields};

#[component]
pub fn ShadowColorPicker() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let pending = StoredValue::new_local(Debounced::new(COLOR_COMMIT_DEBOUNCE_MS, move |color: String| {
        ctx.commit_color(&color);
    }));
    on_cleanup(move || {
        let _ = pending.try_update_value(|debounced| debounced.cancel());
    });

    let on_input = move |ev: web_sys::Event| {
        let Some(color) = normalize_color(&event_target_value(&ev)) else { return };
        store_set_shadow_color(&store, color.clone());
        pending.update_value(|debounced| debounced.schedule(color));
    };

    let flush = move || pending.update_value(|debounced| debounced.flush());

    let pick = move |color: String| {
        store_set_shadow_color(&store, color.clone());
        pending.update_value(|debounced| debounced.cancel());
        ctx.commit_color(&color);
    };

    view! {
        <div class="shadow-color-picker">
            <label>
                "影の色"
                <input
                    type="color"
                    prop:value=move || store.shadow_color().get()
                    on:input=on_input
                    on:change=move |_| flush()
                    on:blur=move |_| flush()
                />
            </label>
            <div class="color-history">
                <For
                    each=move || ctx.color_history.get().colors().to_vec()
                    key=|color| color.clone()
                    children=move |color| {
                        let swatch = color.clone();
                        let background = color.clone();
                        let title = color.clone();
                        view! {
                            <button
                                type="button"
                                class=move || if store.shadow_color().get() == color { "swatch active" } else { "swatch" }
                                style:background-color=background
                                title=title
                                on:click=move |_| pick(swatch.clone())
                            ></button>
                        }
                    }
                />
            </div>
        </div>
    }
}
