use kurbo::Shape;

use crate::document::model::{DrawingElement, ElementKind};
use crate::foundation::core::{BezPath, Point, Rect, Vec2};

/// Extent substituted when an element is missing width or height.
pub const DEFAULT_EXTENT: f64 = 100.0;

/// Flattening tolerance for curved outlines (ellipse arcs).
const CURVE_TOLERANCE: f64 = 0.1;

/// Resolved bounding box of an element, with missing extents defaulted.
pub fn element_bounds(element: &DrawingElement) -> Rect {
    let w = element.width.unwrap_or(DEFAULT_EXTENT);
    let h = element.height.unwrap_or(DEFAULT_EXTENT);
    Rect::new(element.x, element.y, element.x + w, element.y + h)
}

/// Build the reveal outline for an element.
///
/// The outline is what the stroke descriptor draws and what the pointer
/// descriptor traces: a closed perimeter for polygon-like and ellipse kinds,
/// the recorded polyline for line/arrow/freehand (the arrow's head strokes
/// are separate subpaths), and the bounding-box perimeter for everything
/// else. Degenerate geometry never fails: fewer than two points collapse to
/// a two-point zero-length path at the element origin.
pub fn element_outline(element: &DrawingElement) -> BezPath {
    match element.kind {
        ElementKind::Rectangle => rect_perimeter(element_bounds(element)),
        ElementKind::Diamond => diamond_perimeter(element_bounds(element)),
        ElementKind::Ellipse => ellipse_perimeter(element_bounds(element)),
        ElementKind::Line => polyline(&absolute_points(element)),
        ElementKind::Arrow => {
            let pts = absolute_points(element);
            let mut path = polyline(&pts);
            append_arrow_head(&mut path, &pts);
            path
        }
        ElementKind::Freehand => polyline(&absolute_points(element)),
        ElementKind::Text | ElementKind::Image | ElementKind::Other => {
            rect_perimeter(element_bounds(element))
        }
    }
}

/// Recorded points translated to absolute coordinates, defaulted to a
/// two-point zero-length path when fewer than two points exist.
pub fn absolute_points(element: &DrawingElement) -> Vec<Point> {
    let origin = Vec2::new(element.x, element.y);
    let mut pts: Vec<Point> = element.points.iter().map(|p| *p + origin).collect();
    match pts.len() {
        0 => {
            let o = Point::new(element.x, element.y);
            pts = vec![o, o];
        }
        1 => {
            let only = pts[0];
            pts.push(only);
        }
        _ => {}
    }
    pts
}

/// Arc-length-proportional progress fraction for each point, in `[0, 1]`.
///
/// A zero-length polyline degrades to evenly spaced fractions so the table
/// stays monotone.
pub fn polyline_progress(points: &[Point]) -> Vec<f64> {
    if points.len() < 2 {
        return points.iter().map(|_| 1.0).collect();
    }

    let mut cumulative = Vec::with_capacity(points.len());
    cumulative.push(0.0);
    let mut total = 0.0;
    for pair in points.windows(2) {
        total += (pair[1] - pair[0]).hypot();
        cumulative.push(total);
    }

    if total <= 0.0 {
        let last = (points.len() - 1) as f64;
        return (0..points.len()).map(|i| (i as f64) / last).collect();
    }
    cumulative.into_iter().map(|d| d / total).collect()
}

/// Render a path as an SVG `d` attribute string for the output contract.
pub fn svg_path_d(path: &BezPath) -> String {
    path.to_svg()
}

fn rect_perimeter(bounds: Rect) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((bounds.x0, bounds.y0));
    path.line_to((bounds.x1, bounds.y0));
    path.line_to((bounds.x1, bounds.y1));
    path.line_to((bounds.x0, bounds.y1));
    path.close_path();
    path
}

fn diamond_perimeter(bounds: Rect) -> BezPath {
    let cx = (bounds.x0 + bounds.x1) * 0.5;
    let cy = (bounds.y0 + bounds.y1) * 0.5;
    let mut path = BezPath::new();
    path.move_to((cx, bounds.y0));
    path.line_to((bounds.x1, cy));
    path.line_to((cx, bounds.y1));
    path.line_to((bounds.x0, cy));
    path.close_path();
    path
}

fn ellipse_perimeter(bounds: Rect) -> BezPath {
    let ellipse = kurbo::Ellipse::new(
        bounds.center(),
        Vec2::new(bounds.width() * 0.5, bounds.height() * 0.5),
        0.0,
    );
    let mut path = ellipse.to_path(CURVE_TOLERANCE);
    path.close_path();
    path
}

fn polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(*first);
    for p in rest {
        path.line_to(*p);
    }
    path
}

/// Two head strokes at the final point, angled back along the last segment.
/// A zero-length arrow has no direction and gets no head.
fn append_arrow_head(path: &mut BezPath, points: &[Point]) {
    let Some(tip) = points.last().copied() else {
        return;
    };
    let Some(base) = points.iter().rev().find(|p| **p != tip).copied() else {
        return;
    };

    let dir = tip - base;
    let seg_len = dir.hypot();
    let head_len = (seg_len * 0.25).clamp(8.0, 24.0);
    let angle = dir.atan2();

    for side in [-1.0, 1.0] {
        // 150 degrees back from the shaft direction.
        let theta = angle + side * (std::f64::consts::PI * 5.0 / 6.0);
        let end = tip + Vec2::new(theta.cos(), theta.sin()) * head_len;
        path.move_to(tip);
        path.line_to(end);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/outline.rs"]
mod tests;
