//! UI Components
//!
//! Reusable Leptos components.

mod auto_fit_text;
mod export_button;
mod item_count_selector;
mod item_editor;
mod menu_page;
mod preview_stage;
mod shadow_color_picker;

pub use auto_fit_text::AutoFitText;
pub use export_button::ExportButton;
pub use item_count_selector::ItemCountSelector;
pub use item_editor::ItemEditor;
pub use menu_page::MenuPage;
pub use preview_stage::PreviewStage;
pub use shadow_color_picker::ShadowColorPicker;
