use crate::document::config::PlanConfig;
use crate::document::model::{DrawingElement, ElementKind};
use crate::foundation::core::{Point, TimeSpan};
use crate::foundation::error::ChalklineResult;
use crate::geometry::outline::{
    absolute_points, element_outline, polyline_progress, svg_path_d,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One reveal event: what to animate, when, and the geometry payload the
/// renderer needs.
pub struct AnimationDescriptor {
    /// The element this event reveals.
    pub element_id: String,
    /// Back-reference to the animation group, for grouped elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Absolute placement on the timeline.
    pub span: TimeSpan,
    /// Typed payload; the tag is the descriptor kind of the output contract.
    pub op: RevealOp,
}

impl AnimationDescriptor {
    /// Output-contract kind tag for this descriptor.
    pub fn kind(&self) -> &'static str {
        match self.op {
            RevealOp::PolygonStroke { .. } => "polygon-stroke",
            RevealOp::PolygonFill { .. } => "polygon-fill",
            RevealOp::PathStroke { .. } => "path-stroke",
            RevealOp::PathFill { .. } => "path-fill",
            RevealOp::TextTyping { .. } => "text-typing",
            RevealOp::FreehandProgression { .. } => "freehand-progression",
            RevealOp::PointerMotion { .. } => "pointer-motion",
            RevealOp::GenericOpacity => "generic-opacity",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
/// Renderer-facing reveal payload, one variant per descriptor kind.
pub enum RevealOp {
    /// Trace a closed polygon perimeter.
    PolygonStroke {
        /// SVG path `d` string of the perimeter.
        svg_d: String,
    },
    /// Flood the polygon interior after its stroke completes.
    PolygonFill {
        /// SVG path `d` string of the perimeter.
        svg_d: String,
        /// Fill color to paint.
        color: String,
    },
    /// Trace an open or curved path.
    PathStroke {
        /// SVG path `d` string of the geometry.
        svg_d: String,
    },
    /// Flood a path interior after its stroke completes.
    PathFill {
        /// SVG path `d` string of the geometry.
        svg_d: String,
        /// Fill color to paint.
        color: String,
    },
    /// Reveal text one character at a time, proportionally over the span.
    TextTyping {
        /// Full text content.
        text: String,
        /// Character count; zero makes the descriptor a visible no-op.
        char_count: usize,
    },
    /// Explicit point-by-point timing for a freehand stroke.
    FreehandProgression {
        /// Recorded points in absolute coordinates.
        points: Vec<Point>,
        /// Fractional position of each point in `[0, 1]` of the span.
        progress: Vec<f64>,
    },
    /// Move the pointer along the same geometry the stroke draws.
    PointerMotion {
        /// SVG path `d` string of the traced geometry.
        svg_d: String,
    },
    /// Fade the element in; fallback for unrecognized kinds, never an error.
    GenericOpacity,
}

/// Emit the descriptors revealing one element over `span`.
///
/// Kinds map per the output contract: rectangle and diamond split the span
/// into stroke then fill (fixed ratio, no gap, no overlap; fill only for a
/// real fill color); ellipse, line, arrow and freehand get a full-span stroke
/// plus an equal-span pointer trace of the identical geometry; freehand adds
/// its progress table; text types proportionally per character; anything else
/// fades in.
pub fn describe(
    element: &DrawingElement,
    span: TimeSpan,
    group_id: Option<&str>,
    config: &PlanConfig,
) -> ChalklineResult<Vec<AnimationDescriptor>> {
    let make = |op: RevealOp, span: TimeSpan| AnimationDescriptor {
        element_id: element.id.clone(),
        group_id: group_id.map(str::to_string),
        span,
        op,
    };

    let descriptors = match element.kind {
        ElementKind::Rectangle | ElementKind::Diamond => {
            let svg_d = svg_path_d(&element_outline(element));
            let (stroke, fill) = span.split_at_fraction(config.stroke_fill_ratio)?;
            let mut out = vec![make(
                RevealOp::PolygonStroke {
                    svg_d: svg_d.clone(),
                },
                stroke,
            )];
            if element.has_fill() {
                out.push(make(
                    RevealOp::PolygonFill {
                        svg_d,
                        color: element.fill_color.clone().unwrap_or_default(),
                    },
                    fill,
                ));
            }
            out
        }
        ElementKind::Ellipse | ElementKind::Line | ElementKind::Arrow => {
            let svg_d = svg_path_d(&element_outline(element));
            vec![
                make(
                    RevealOp::PathStroke {
                        svg_d: svg_d.clone(),
                    },
                    span,
                ),
                make(RevealOp::PointerMotion { svg_d }, span),
            ]
        }
        ElementKind::Freehand => {
            let points = absolute_points(element);
            let svg_d = svg_path_d(&element_outline(element));
            vec![
                make(
                    RevealOp::PathStroke {
                        svg_d: svg_d.clone(),
                    },
                    span,
                ),
                make(RevealOp::PointerMotion { svg_d }, span),
                make(
                    RevealOp::FreehandProgression {
                        progress: polyline_progress(&points),
                        points,
                    },
                    span,
                ),
            ]
        }
        ElementKind::Text => {
            let text = element.text.clone().unwrap_or_default();
            let char_count = text.chars().count();
            vec![make(RevealOp::TextTyping { text, char_count }, span)]
        }
        ElementKind::Image | ElementKind::Other => {
            vec![make(RevealOp::GenericOpacity, span)]
        }
    };

    Ok(descriptors)
}

#[cfg(test)]
#[path = "../../tests/unit/plan/descriptor.rs"]
mod tests;
