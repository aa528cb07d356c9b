//! Auto-Fit Text Component
//!
//! Text that takes the largest font size its box can hold. Refits when the
//! text changes, the box or window resizes, and once fonts have loaded.

use leptos::html;
use leptos::prelude::*;
use menu_fit::{display_text, fit_font_size, FontRange};
use web_sys::Element;

use crate::config::ITEM_FONT_RANGE;
use crate::context::use_app_context;
use crate::dom::{content_box, set_font_size, DomTextMeasure, ResizeWatch};

#[component]
pub fn AutoFitText(
    #[prop(into)] text: Signal<String>,
    #[prop(default = ITEM_FONT_RANGE)] range: FontRange,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let ctx = use_app_context();
    let box_ref = NodeRef::<html::Div>::new();
    let text_ref = NodeRef::<html::Div>::new();
    let (layout_tick, set_layout_tick) = signal(0u32);
    let watch = StoredValue::new_local(None::<ResizeWatch>);

    let bump = move || set_layout_tick.update(|tick| *tick = tick.wrapping_add(1));

    // Watch the box once it is mounted
    Effect::new(move |_| {
        let Some(container) = box_ref.get() else { return };
        let target: &Element = &container;
        match ResizeWatch::new(&[target], bump) {
            Ok(observer) => watch.update_value(|slot| *slot = Some(observer)),
            Err(e) => tracing::warn!("[AutoFit] Resize observer unavailable: {}", e),
        }
    });

    let resize = window_event_listener(leptos::ev::resize, move |_| bump());
    on_cleanup(move || {
        resize.remove();
        let _ = watch.try_update_value(|slot| slot.take());
    });

    // Fit
    Effect::new(move |_| {
        let content = text.get();
        layout_tick.track();
        ctx.fonts_ready.track();

        let (Some(container), Some(node)) = (box_ref.get(), text_ref.get()) else { return };
        node.set_text_content(Some(display_text(&content)));

        let available = content_box(&container).height;
        let mut measure = DomTextMeasure::new(&node);
        if let Some(size) = fit_font_size(&mut measure, available, range) {
            set_font_size(&node, size);
            tracing::trace!("[AutoFit] {:?} -> {}px (available {})", content, size, available);
        }
    });

    view! {
        <div class=format!("autofit-box {}", class) node_ref=box_ref>
            <div class="autofit-text" node_ref=text_ref></div>
        </div>
    }
}
