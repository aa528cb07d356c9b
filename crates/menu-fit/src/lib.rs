//! Menu Fit
//!
//! Host-independent fitting routines for a fixed-size printable page:
//! - `autofit`: the largest font size whose wrapped text fits a box
//! - `page_scale`: the uniform scale that fits the page into a viewport
//!
//! Measuring text is left to the caller through [`TextMeasure`], so the
//! search itself runs the same in a browser and in native tests.

pub mod autofit;
pub mod page_scale;

pub use autofit::{display_text, fit_font_size, FontRange, TextMeasure, EMPTY_PLACEHOLDER};
pub use page_scale::{fit_page_scale, PageSize, Size};
