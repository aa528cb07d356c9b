//! DOM Helpers
//!
//! Measurement, resize observation and font loading on the browser side of
//! the fitting routines.

use menu_fit::{Size, TextMeasure};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlElement, ResizeObserver};

use crate::error::{js_error, AppError, AppResult};

fn px(value: &str) -> f64 {
    value.trim().trim_end_matches("px").parse().unwrap_or(0.0)
}

/// Horizontal and vertical padding of `el`, in px
pub fn padding(el: &Element) -> (f64, f64) {
    let Some(style) = web_sys::window().and_then(|w| w.get_computed_style(el).ok().flatten()) else {
        return (0.0, 0.0);
    };
    let side = |name: &str| style.get_property_value(name).map(|v| px(&v)).unwrap_or(0.0);
    (
        side("padding-left") + side("padding-right"),
        side("padding-top") + side("padding-bottom"),
    )
}

/// Client size of `el` minus its own padding (layout size, unaffected by transforms)
pub fn content_box(el: &Element) -> Size {
    let (horizontal, vertical) = padding(el);
    Size::new(el.client_width() as f64, el.client_height() as f64).shrink(horizontal, vertical)
}

pub fn set_font_size(el: &HtmlElement, size: u32) {
    if let Err(e) = el.style().set_property("font-size", &format!("{}px", size)) {
        tracing::warn!("[Dom] Failed to set font-size: {}", js_error(e));
    }
}

/// Measures an element by assigning a font size and reading its layout height
pub struct DomTextMeasure<'a> {
    el: &'a HtmlElement,
}

impl<'a> DomTextMeasure<'a> {
    pub fn new(el: &'a HtmlElement) -> Self {
        Self { el }
    }
}

impl TextMeasure for DomTextMeasure<'_> {
    fn height_at(&mut self, size: u32) -> f64 {
        set_font_size(self.el, size);
        // offsetHeight forces a synchronous layout
        self.el.offset_height() as f64
    }
}

/// A `ResizeObserver` watching one or more elements.
/// Disconnects when dropped.
pub struct ResizeWatch {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut()>,
}

impl ResizeWatch {
    pub fn new(targets: &[&Element], on_resize: impl FnMut() + 'static) -> AppResult<Self> {
        let callback = Closure::<dyn FnMut()>::new(on_resize);
        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|e| AppError::Dom(js_error(e)))?;
        for target in targets {
            observer.observe(target);
        }
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Resolves once `document.fonts` has finished loading
pub async fn fonts_ready() -> AppResult<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::Dom("document is unavailable".to_string()))?;
    let ready = document.fonts().ready().map_err(|e| AppError::Dom(js_error(e)))?;
    JsFuture::from(ready).await.map_err(|e| AppError::Dom(js_error(e)))?;
    Ok(())
}

/// Blocking user-facing alert
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
