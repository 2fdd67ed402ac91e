//! Shared geometry helpers for layout engines.

use mermaid_lite_core::geometry::{Point, Size};

/// Clips the segment between two box centers to the box boundaries.
///
/// Only the dominant axis is clipped: if the horizontal distance is larger
/// the endpoints move by half the box width, otherwise by half the height.
/// Both boxes are assumed to share `size`.
pub fn clip_to_boxes(from: Point, to: Point, size: Size) -> (Point, Point) {
    let delta = to.sub_point(from);

    if delta.x().abs() > delta.y().abs() {
        let offset = delta.x().signum() * size.width() / 2.0;
        (from.with_x(from.x() + offset), to.with_x(to.x() - offset))
    } else {
        let offset = delta.y().signum() * size.height() / 2.0;
        (from.with_y(from.y() + offset), to.with_y(to.y() - offset))
    }
}
