//! Menu Card App
//!
//! Two-column layout: item form on the left, scaled page preview on the right.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::color_history::{load_color_history, LocalPreferenceStore};
use crate::components::{
    ExportButton, ItemCountSelector, ItemEditor, MenuPage, PreviewStage, ShadowColorPicker,
};
use crate::context::AppContext;
use crate::dom;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let history = load_color_history(&LocalPreferenceStore);
    let store = Store::new(AppState::new(history.latest()));
    let (color_history, set_color_history) = signal(history);
    let (fonts_ready, set_fonts_ready) = signal(false);
    let page_ref = NodeRef::<html::Div>::new();

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new((color_history, set_color_history), fonts_ready, page_ref));

    // Text metrics are unreliable until web fonts have loaded
    spawn_local(async move {
        if let Err(e) = dom::fonts_ready().await {
            tracing::warn!("[APP] Font loading did not complete: {}", e);
        }
        tracing::debug!("[APP] Fonts ready");
        set_fonts_ready.set(true);
    });

    let editors = store
        .items()
        .get_untracked()
        .into_iter()
        .enumerate()
        .map(|(index, item)| view! { <ItemEditor item_id=item.id index=index /> })
        .collect_view();

    view! {
        <div class="app-layout">
            // Left: form
            <aside class="control-panel">
                <h1>"メニュー表"</h1>
                <ItemCountSelector />
                {editors}
                <ShadowColorPicker />
                <ExportButton />
            </aside>

            // Right: preview
            <main class="preview-area">
                <PreviewStage page_ref=page_ref>
                    <MenuPage />
                </PreviewStage>
            </main>
        </div>
    }
}
