//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::html;
use leptos::prelude::*;

use crate::color_history::{save_color_history, ColorHistory, LocalPreferenceStore};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Remembered shadow colors - read
    pub color_history: ReadSignal<ColorHistory>,
    /// Remembered shadow colors - write
    set_color_history: WriteSignal<ColorHistory>,
    /// Flips to true once web fonts have loaded
    pub fonts_ready: ReadSignal<bool>,
    /// The on-screen page element (capture target)
    pub page_ref: NodeRef<html::Div>,
}

impl AppContext {
    pub fn new(
        color_history: (ReadSignal<ColorHistory>, WriteSignal<ColorHistory>),
        fonts_ready: ReadSignal<bool>,
        page_ref: NodeRef<html::Div>,
    ) -> Self {
        Self {
            color_history: color_history.0,
            set_color_history: color_history.1,
            fonts_ready,
            page_ref,
        }
    }

    /// Move `color` to the front of the history and persist it
    pub fn commit_color(&self, color: &str) {
        self.set_color_history.update(|history| {
            if !history.push(color) {
                tracing::debug!("[ColorHistory] Rejected color {:?}", color);
                return;
            }
            if let Err(e) = save_color_history(&LocalPreferenceStore, history) {
                tracing::warn!("[ColorHistory] Failed to persist history: {}", e);
            }
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
