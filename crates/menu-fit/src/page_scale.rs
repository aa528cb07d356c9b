//! Page Scale Fitting
//!
//! Uniform shrink-to-fit of a fixed logical page into a viewport.

/// Width and height in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Subtract padding on both axes, clamped at zero
    pub fn shrink(self, horizontal: f64, vertical: f64) -> Self {
        Self {
            width: (self.width - horizontal).max(0.0),
            height: (self.height - vertical).max(0.0),
        }
    }
}

/// Logical page dimensions
pub type PageSize = Size;

impl Size {
    /// A4 portrait at 96 dpi
    pub const A4: PageSize = Size { width: 794.0, height: 1123.0 };
}

/// Scale factor in (0, 1] fitting `page` inside `available` on both axes.
///
/// Falls back to `1.0` whenever the ratio is not a finite positive number,
/// e.g. before the container has been laid out.
pub fn fit_page_scale(page: PageSize, available: Size) -> f64 {
    let width_ratio = available.width / page.width;
    let height_ratio = available.height / page.height;
    if width_ratio.is_nan() || height_ratio.is_nan() {
        return 1.0;
    }

    let scale = width_ratio.min(height_ratio).min(1.0);

    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_upscales() {
        assert_eq!(fit_page_scale(Size::A4, Size::new(800.0, 1200.0)), 1.0);
        assert_eq!(fit_page_scale(Size::A4, Size::new(4000.0, 4000.0)), 1.0);
    }

    #[test]
    fn test_width_bound() {
        assert_eq!(fit_page_scale(Size::A4, Size::new(397.0, 1123.0)), 0.5);
    }

    #[test]
    fn test_height_bound() {
        let scale = fit_page_scale(Size::A4, Size::new(794.0, 561.5));
        assert!((scale - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_unmeasurable_container_falls_back_to_one() {
        assert_eq!(fit_page_scale(Size::A4, Size::new(0.0, 0.0)), 1.0);
        assert_eq!(fit_page_scale(Size::A4, Size::new(f64::NAN, 500.0)), 1.0);
        assert_eq!(fit_page_scale(Size::A4, Size::new(-10.0, 500.0)), 1.0);
        assert_eq!(fit_page_scale(Size::new(0.0, 0.0), Size::new(0.0, 0.0)), 1.0);
    }

    #[test]
    fn test_infinite_available_is_clamped_to_one() {
        assert_eq!(fit_page_scale(Size::A4, Size::new(f64::INFINITY, f64::INFINITY)), 1.0);
    }

    #[test]
    fn test_shrink_clamps_at_zero() {
        let size = Size::new(100.0, 50.0).shrink(40.0, 80.0);
        assert_eq!(size, Size::new(60.0, 0.0));
    }
}
