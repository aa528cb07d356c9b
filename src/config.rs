//! Application Constants
//!
//! Page geometry, pricing and preference settings.

use menu_fit::{FontRange, PageSize};

/// Logical page size (A4 portrait at 96 dpi)
pub const PAGE_SIZE: PageSize = PageSize::A4;

/// Pixel density multiplier for exported PNGs
pub const EXPORT_PIXEL_RATIO: f64 = 2.0;

/// Background forced onto the page while it is captured
pub const EXPORT_BACKGROUND: &str = "#ffffff";

/// Font size range for item lines (px)
pub const ITEM_FONT_RANGE: FontRange = FontRange::MENU_LINE;

/// Consumption tax as a ratio: 11/10 = 1.1
pub const TAX_NUMERATOR: u64 = 11;
pub const TAX_DENOMINATOR: u64 = 10;

/// localStorage key holding the shadow color history
pub const COLOR_HISTORY_KEY: &str = "menu-card.shadow-color-history";

/// Maximum number of remembered shadow colors
pub const COLOR_HISTORY_CAP: usize = 8;

/// Shadow color used when nothing usable is stored
pub const DEFAULT_SHADOW_COLOR: &str = "#ff8c00";

/// Delay before a picked color is committed to history (ms)
pub const COLOR_COMMIT_DEBOUNCE_MS: u32 = 400;

/// Items shown on first load (name, price)
pub const DEFAULT_ITEMS: &[(&str, &str)] = &[
    ("メニュー１", "980"),
    ("メニュー２", "888"),
];
