//! Preview Stage Component
//!
//! Shrinks the fixed-size page to fit the available viewport area.

use leptos::html;
use leptos::prelude::*;
use menu_fit::fit_page_scale;
use web_sys::Element;

use crate::config::PAGE_SIZE;
use crate::dom::{content_box, ResizeWatch};

/// Stage holding the scaled page; `page_ref` is attached to the page itself
#[component]
pub fn PreviewStage(page_ref: NodeRef<html::Div>, children: Children) -> impl IntoView {
    let stage_ref = NodeRef::<html::Div>::new();
    let (scale, set_scale) = signal(1.0f64);
    let watch = StoredValue::new_local(None::<ResizeWatch>);

    let refit = move || {
        let Some(stage) = stage_ref.get_untracked() else { return };
        let next = fit_page_scale(PAGE_SIZE, content_box(&stage));
        if (next - scale.get_untracked()).abs() > f64::EPSILON {
            tracing::debug!("[Preview] Page scale {:.3}", next);
            set_scale.set(next);
        }
    };

    // Observe both the stage and the page once mounted
    Effect::new(move |_| {
        let (Some(stage), Some(page)) = (stage_ref.get(), page_ref.get()) else { return };
        refit();
        let stage: &Element = &stage;
        let page: &Element = &page;
        match ResizeWatch::new(&[stage, page], refit) {
            Ok(observer) => watch.update_value(|slot| *slot = Some(observer)),
            Err(e) => tracing::warn!("[Preview] Resize observer unavailable: {}", e),
        }
    });

    let resize = window_event_listener(leptos::ev::resize, move |_| refit());
    on_cleanup(move || {
        resize.remove();
        let _ = watch.try_update_value(|slot| slot.take());
    });

    view! {
        <div class="preview-stage" node_ref=stage_ref>
            <div
                class="page-frame"
                style:width=move || format!("{}px", PAGE_SIZE.width * scale.get())
                style:height=move || format!("{}px", PAGE_SIZE.height * scale.get())
            >
                <div
                    class="menu-page"
                    node_ref=page_ref
                    style:transform=move || format!("scale({})", scale.get())
                >
                    {children()}
                </div>
            </div>
        </div>
    }
}
