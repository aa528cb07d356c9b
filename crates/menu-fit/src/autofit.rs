//! Auto-Fit Font Size
//!
//! Binary search over an integer font size range against a measured height.

/// Inclusive font size range, in the units of the rendering surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontRange {
    pub min: u32,
    pub max: u32,
}

impl FontRange {
    /// Range used for the menu page item lines (px)
    pub const MENU_LINE: FontRange = FontRange { min: 48, max: 220 };

    /// Build a range, swapping the bounds if they are given inverted
    pub fn new(min: u32, max: u32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }
}

impl Default for FontRange {
    fn default() -> Self {
        Self::MENU_LINE
    }
}

/// Non-breaking space measured in place of empty text, so an empty line
/// keeps the height of one line
pub const EMPTY_PLACEHOLDER: &str = "\u{00A0}";

pub fn display_text(text: &str) -> &str {
    if text.is_empty() {
        EMPTY_PLACEHOLDER
    } else {
        text
    }
}

/// Capability to lay out text at a given size and report its height.
///
/// Every call must reflect the size just applied; implementations must not
/// batch or defer layout between measurements.
pub trait TextMeasure {
    fn height_at(&mut self, size: u32) -> f64;
}

impl<F> TextMeasure for F
where
    F: FnMut(u32) -> f64,
{
    fn height_at(&mut self, size: u32) -> f64 {
        self(size)
    }
}

/// Find the largest size in `range` whose measured height fits `available`.
///
/// Returns `None` without measuring when `available` is not a positive
/// finite number. When no size fits, `range.min` is returned.
///
/// The measurer is left at whatever size was measured last; callers apply the
/// returned size afterwards.
pub fn fit_font_size<M: TextMeasure + ?Sized>(
    measure: &mut M,
    available: f64,
    range: FontRange,
) -> Option<u32> {
    if !available.is_finite() || available <= 0.0 {
        return None;
    }

    let range = FontRange::new(range.min, range.max);
    let mut lo = range.min;
    let mut hi = range.max;
    let mut best = range.min;
    let mut measurements = 0u32;

    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let height = measure.height_at(mid);
        measurements += 1;

        if height <= available {
            best = mid;
            if mid == range.max {
                break;
            }
            lo = mid + 1;
        } else if mid == 0 {
            break;
        } else {
            hi = mid - 1;
        }
    }

    tracing::trace!(best, measurements, available, "[AutoFit] search finished");
    Some(best)
}
