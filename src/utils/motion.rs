//! Scroll-linked motion helpers for the navigation bar.

use serde::Deserialize;

/// Scroll position reported by the window scroll listener
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Progress through the page, 0.0 at the top and 1.0 at the bottom.
    /// A page that does not scroll stays at 0.0.
    pub fn progress(&self) -> f64 {
        let scrollable = self.scroll_height - self.viewport_height;
        if scrollable <= 0.0 || !scrollable.is_finite() {
            return 0.0;
        }
        (self.scroll_y / scrollable).clamp(0.0, 1.0)
    }
}

/// Linearly map `value` from `input` onto `output`, clamping outside the input range
pub fn transform(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_end == in_start {
        return out_end;
    }
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

/// Nav bar fades in over the first half of the page
pub const NAV_PROGRESS_RANGE: (f64, f64) = (0.0, 0.5);
pub const NAV_OPACITY_RANGE: (f64, f64) = (0.2, 1.0);
pub const NAV_SCALE_RANGE: (f64, f64) = (0.8, 1.0);

/// Inline style for the nav bar at the given scroll progress
pub fn nav_style(progress: f64) -> String {
    let opacity = transform(progress, NAV_PROGRESS_RANGE, NAV_OPACITY_RANGE);
    let scale = transform(progress, NAV_PROGRESS_RANGE, NAV_SCALE_RANGE);
    format!("opacity: {:.3}; transform: scale({:.3});", opacity, scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_y: f64) -> ScrollMetrics {
        ScrollMetrics { scroll_y, scroll_height: 3000.0, viewport_height: 1000.0 }
    }

    #[test]
    fn progress_spans_scrollable_height() {
        assert_eq!(metrics(0.0).progress(), 0.0);
        assert_eq!(metrics(1000.0).progress(), 0.5);
        assert_eq!(metrics(2000.0).progress(), 1.0);
    }

    #[test]
    fn progress_is_clamped_for_overscroll() {
        assert_eq!(metrics(-40.0).progress(), 0.0);
        assert_eq!(metrics(2300.0).progress(), 1.0);
    }

    #[test]
    fn short_page_has_zero_progress() {
        let short = ScrollMetrics { scroll_y: 0.0, scroll_height: 800.0, viewport_height: 1000.0 };
        assert_eq!(short.progress(), 0.0);
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn transform_interpolates_and_clamps() {
        assert!(approx(transform(0.0, NAV_PROGRESS_RANGE, NAV_OPACITY_RANGE), 0.2));
        assert!(approx(transform(0.25, NAV_PROGRESS_RANGE, NAV_OPACITY_RANGE), 0.6));
        assert!(approx(transform(0.5, NAV_PROGRESS_RANGE, NAV_OPACITY_RANGE), 1.0));
        assert!(approx(transform(0.9, NAV_PROGRESS_RANGE, NAV_SCALE_RANGE), 1.0));
        assert!(approx(transform(-1.0, NAV_PROGRESS_RANGE, NAV_SCALE_RANGE), 0.8));
    }

    #[test]
    fn degenerate_input_range_yields_output_end() {
        assert_eq!(transform(3.0, (1.0, 1.0), (0.0, 5.0)), 5.0);
    }

    #[test]
    fn nav_style_at_top_of_page() {
        assert_eq!(nav_style(0.0), "opacity: 0.200; transform: scale(0.800);");
    }

    #[test]
    fn scroll_metrics_deserialize_from_listener_payload() {
        let parsed: ScrollMetrics = serde_json::from_str(
            r#"{ "scroll_y": 12.5, "scroll_height": 2000, "viewport_height": 900 }"#
        ).unwrap();
        assert_eq!(parsed.scroll_y, 12.5);
        assert_eq!(parsed.viewport_height, 900.0);
    }
}
