//! Export Button Component
//!
//! Downloads the page as a PNG. Clicks while an export is running are ignored.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::dom::alert;
use crate::error::AppError;
use crate::export::{export_file_name, export_page};

#[component]
pub fn ExportButton() -> impl IntoView {
    let ctx = use_app_context();
    let (exporting, set_exporting) = signal(false);

    let on_click = move |_| {
        if exporting.get_untracked() {
            tracing::debug!("[Export] Already running, ignoring click");
            return;
        }
        let Some(page) = ctx.page_ref.get_untracked() else {
            tracing::error!("[Export] {}", AppError::PageNotMounted);
            alert("画像の書き出しに失敗しました");
            return;
        };

        set_exporting.set(true);
        spawn_local(async move {
            let file_name = export_file_name(Utc::now());
            match export_page(&page, &file_name).await {
                Ok(()) => tracing::info!("[Export] Saved {}", file_name),
                Err(e) => {
                    tracing::error!("[Export] Failed: {}", e);
                    alert(&format!("画像の書き出しに失敗しました: {}", e));
                }
            }
            set_exporting.set(false);
        });
    };

    view! {
        <button
            type="button"
            class="export-btn"
            disabled=move || exporting.get()
            on:click=on_click
        >
            {move || if exporting.get() { "書き出し中..." } else { "PNGで保存" }}
        </button>
    }
}
