//! Page Export
//!
//! Rasterizes the page element to PNG through the `html-to-image` library
//! and offers the result as a download.

use chrono::{DateTime, Utc};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, HtmlAnchorElement, HtmlElement};

use crate::config::{EXPORT_BACKGROUND, EXPORT_PIXEL_RATIO, PAGE_SIZE};
use crate::error::{js_error, AppError, AppResult};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = htmlToImage, js_name = toPng)]
    async fn html_to_png(node: &HtmlElement, options: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
struct CaptureOptions {
    width: f64,
    height: f64,
    #[serde(rename = "pixelRatio")]
    pixel_ratio: f64,
    #[serde(rename = "backgroundColor")]
    background_color: &'static str,
}

impl CaptureOptions {
    fn for_page() -> Self {
        Self {
            width: PAGE_SIZE.width,
            height: PAGE_SIZE.height,
            pixel_ratio: EXPORT_PIXEL_RATIO,
            background_color: EXPORT_BACKGROUND,
        }
    }
}

/// Inline styles that put the page in its natural, unscaled state
fn capture_overrides() -> Vec<(&'static str, String)> {
    vec![
        ("transform", "none".to_string()),
        ("width", format!("{}px", PAGE_SIZE.width)),
        ("height", format!("{}px", PAGE_SIZE.height)),
        ("background", EXPORT_BACKGROUND.to_string()),
        ("box-shadow", "none".to_string()),
    ]
}

struct SavedProperty {
    name: &'static str,
    value: String,
    priority: String,
    /// Value read back after the override was set
    applied: String,
}

/// Temporary inline style overrides, restored when dropped.
///
/// A property written by someone else while the guard is alive keeps the
/// newer value instead of being rolled back.
pub struct StyleOverride {
    style: CssStyleDeclaration,
    saved: Vec<SavedProperty>,
}

impl StyleOverride {
    pub fn apply(el: &HtmlElement, overrides: &[(&'static str, String)]) -> AppResult<Self> {
        let mut guard = Self {
            style: el.style(),
            saved: Vec::with_capacity(overrides.len()),
        };
        for (name, value) in overrides {
            let previous = guard.read(name)?;
            let priority = guard.style.get_property_priority(name);
            guard
                .style
                .set_property_with_priority(name, value, "important")
                .map_err(|e| AppError::Dom(js_error(e)))?;
            guard.saved.push(SavedProperty {
                name: *name,
                value: previous,
                priority,
                applied: guard.read(name)?,
            });
        }
        Ok(guard)
    }

    fn read(&self, name: &str) -> AppResult<String> {
        self.style
            .get_property_value(name)
            .map_err(|e| AppError::Dom(js_error(e)))
    }

    fn still_applied(&self, saved: &SavedProperty) -> bool {
        self.read(saved.name).map(|v| v == saved.applied).unwrap_or(false)
            && self.style.get_property_priority(saved.name) == "important"
    }
}

impl Drop for StyleOverride {
    fn drop(&mut self) {
        for saved in self.saved.iter().rev() {
            if !self.still_applied(saved) {
                tracing::debug!("[Export] {} changed during capture, keeping it", saved.name);
                continue;
            }
            let result = if saved.value.is_empty() {
                self.style.remove_property(saved.name).map(|_| ())
            } else {
                self.style
                    .set_property_with_priority(saved.name, &saved.value, &saved.priority)
            };
            if let Err(e) = result {
                tracing::warn!("[Export] Failed to restore {}: {}", saved.name, js_error(e));
            }
        }
    }
}

/// `menu_<yyyyMMddHHmm>.png` for the given UTC time
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("menu_{}.png", now.format("%Y%m%d%H%M"))
}

/// Capture `page` at its logical size and download it as `file_name`
pub async fn export_page(page: &HtmlElement, file_name: &str) -> AppResult<()> {
    let data_url = {
        let _restore = StyleOverride::apply(page, &capture_overrides())?;
        let options = serde_wasm_bindgen::to_value(&CaptureOptions::for_page())
            .map_err(|e| AppError::Capture(e.to_string()))?;
        html_to_png(page, options)
            .await
            .map_err(|e| AppError::Capture(js_error(e)))?
    };

    let data_url = data_url
        .as_string()
        .ok_or_else(|| AppError::Capture("rasterizer returned no data URL".to_string()))?;
    download(&data_url, file_name)
}

fn download(href: &str, file_name: &str) -> AppResult<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::Dom("document is unavailable".to_string()))?;
    let anchor = document
        .create_element("a")
        .map_err(|e| AppError::Dom(js_error(e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| AppError::Dom("created element is not an anchor".to_string()))?;
    anchor.set_href(href);
    anchor.set_download(file_name);

    let body = document
        .body()
        .ok_or_else(|| AppError::Dom("document has no body".to_string()))?;
    body.append_child(&anchor).map_err(|e| AppError::Dom(js_error(e)))?;
    anchor.click();
    anchor.remove();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_export_file_name_uses_utc_minutes() {
        let now = Utc.with_ymd_and_hms(2026, 3, 7, 9, 5, 42).unwrap();
        assert_eq!(export_file_name(now), "menu_202603070905.png");
    }

    #[test]
    fn test_export_file_name_stamp_is_twelve_chars() {
        let name = export_file_name(Utc::now());
        let stamp = name.strip_prefix("menu_").and_then(|s| s.strip_suffix(".png")).unwrap();
        assert_eq!(stamp.len(), 12);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_capture_overrides_neutralize_scale() {
        let overrides = capture_overrides();
        assert!(overrides.contains(&("transform", "none".to_string())));
        assert!(overrides.contains(&("width", "794px".to_string())));
        assert!(overrides.contains(&("height", "1123px".to_string())));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Detached div with an inline preview scale and no inline size
    fn scaled_page() -> HtmlElement {
        let page = web_sys::window()
            .and_then(|w| w.document())
            .unwrap()
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        page.style().set_property("transform", "scale(0.5)").unwrap();
        page
    }

    fn property(el: &HtmlElement, name: &str) -> (String, String) {
        let style = el.style();
        (style.get_property_value(name).unwrap(), style.get_property_priority(name))
    }

    fn rasterize_failing() -> AppResult<()> {
        Err(AppError::Capture("rasterizer rejected the node".to_string()))
    }

    fn capture_with_failure(page: &HtmlElement) -> AppResult<()> {
        let _restore = StyleOverride::apply(page, &capture_overrides())?;
        assert_eq!(property(page, "transform"), ("none".to_string(), "important".to_string()));
        rasterize_failing()?;
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_overrides_are_reverted_on_drop() {
        let page = scaled_page();
        {
            let _restore = StyleOverride::apply(&page, &capture_overrides()).unwrap();
            assert_eq!(property(&page, "transform"), ("none".to_string(), "important".to_string()));
            assert_eq!(property(&page, "width").0, "794px");
        }
        assert_eq!(property(&page, "transform"), ("scale(0.5)".to_string(), String::new()));
        assert_eq!(property(&page, "width").0, "");
        assert_eq!(property(&page, "height").0, "");
    }

    #[wasm_bindgen_test]
    fn test_overrides_are_reverted_on_early_error_return() {
        let page = scaled_page();
        assert!(matches!(capture_with_failure(&page), Err(AppError::Capture(_))));
        assert_eq!(property(&page, "transform"), ("scale(0.5)".to_string(), String::new()));
        assert_eq!(property(&page, "width").0, "");
    }

    #[wasm_bindgen_test]
    fn test_newer_write_during_capture_is_kept() {
        let page = scaled_page();
        {
            let _restore = StyleOverride::apply(&page, &capture_overrides()).unwrap();
            // the preview rescales while the capture is in flight
            page.style().set_property("transform", "scale(0.7)").unwrap();
        }
        assert_eq!(property(&page, "transform"), ("scale(0.7)".to_string(), String::new()));
        assert_eq!(property(&page, "width").0, "");
    }
}
