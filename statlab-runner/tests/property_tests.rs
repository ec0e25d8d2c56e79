//! Property tests for the figure model and export naming.

use proptest::prelude::*;
use statlab_runner::export::slug;
use statlab_runner::{LineStyle, Marker, Panel, Series};

proptest! {
    /// Bounds enclose every plotted point and every marker.
    #[test]
    fn bounds_enclose_points(
        points in prop::collection::vec((-1.0e4..1.0e4_f64, -1.0e4..1.0e4_f64), 1..50),
        marker_x in -1.0e4..1.0e4_f64,
    ) {
        let panel = Panel::new("p", "x", "y")
            .with_series(Series::scatter("s", points.clone()))
            .with_marker(Marker::vertical(marker_x, "m", LineStyle::Solid));
        let b = panel.bounds();
        prop_assert!(b.x.0 < b.x.1 && b.y.0 < b.y.1);
        for (x, y) in points {
            prop_assert!(b.x.0 <= x && x <= b.x.1);
            prop_assert!(b.y.0 <= y && y <= b.y.1);
        }
        prop_assert!(b.x.0 <= marker_x && marker_x <= b.x.1);
    }

    /// Slugs are safe file-name fragments.
    #[test]
    fn slugs_are_file_safe(name in ".{0,40}") {
        let s = slug(&name);
        prop_assert!(s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
        prop_assert!(!s.starts_with('_') && !s.ends_with('_'));
        prop_assert!(!s.contains("__"));
    }
}
