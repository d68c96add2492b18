use std::collections::BTreeSet;

use crate::foundation::core::Point;
use crate::foundation::error::{ChalklineError, ChalklineResult};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A static vector drawing: the ordered set of elements to animate.
///
/// A drawing is a pure data model produced by an external parser. Chalkline
/// treats it as read-only input; scheduling never mutates it.
pub struct Drawing {
    /// Elements in authoring (insertion) order.
    pub elements: Vec<DrawingElement>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One shape in a drawing.
///
/// Geometry fields are deliberately lenient: a missing extent or an empty
/// point list is tolerated and substituted with documented defaults when the
/// element's outline is built ([`crate::geometry`]). Referential and numeric
/// garbage is rejected up front by [`Drawing::validate`].
pub struct DrawingElement {
    /// Unique element identifier.
    pub id: String,
    /// Shape kind; unrecognized kinds deserialize to [`ElementKind::Other`].
    pub kind: ElementKind,
    /// Top-left x position.
    #[serde(default)]
    pub x: f64,
    /// Top-left y position.
    #[serde(default)]
    pub y: f64,
    /// Extent width; `None` falls back to the default bounding box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Extent height; `None` falls back to the default bounding box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Point list for line-like and freehand kinds, relative to `(x, y)`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<Point>,
    /// Text content for text elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Ordered group memberships; the first entry is the primary group.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<String>,
    /// Explicit authoring order. Absent sorts as hint 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_hint: Option<i64>,
    /// Authoring creation timestamp (unix milliseconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_ms: Option<i64>,
    /// Authoring last-update timestamp (unix milliseconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at_ms: Option<i64>,
    /// Stable creation nonce, used as an ordering tiebreaker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    /// Stroke color (authoring string, passed through to the renderer).
    #[serde(default = "default_stroke_color")]
    pub stroke_color: String,
    /// Fill color; `None` or `"none"` means unfilled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    /// Per-element duration override in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_override_ms: Option<u64>,
}

fn default_stroke_color() -> String {
    "#000000".to_string()
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Shape kind of a drawing element.
pub enum ElementKind {
    /// Axis-aligned rectangle.
    Rectangle,
    /// Diamond (rectangle rotated 45 degrees, drawn from edge midpoints).
    Diamond,
    /// Ellipse inscribed in the bounding box.
    Ellipse,
    /// Straight or bent line through a point list.
    Line,
    /// Line with an arrow head at the final point.
    Arrow,
    /// Text block.
    Text,
    /// Freehand stroke through recorded points.
    Freehand,
    /// Embedded raster image.
    Image,
    /// Any kind this engine does not recognize; unknown kind strings
    /// deserialize here.
    #[default]
    #[serde(other)]
    Other,
}

impl DrawingElement {
    /// Minimal constructor for a kind and id; everything else defaulted.
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            x: 0.0,
            y: 0.0,
            width: None,
            height: None,
            points: Vec::new(),
            text: None,
            group_ids: Vec::new(),
            order_hint: None,
            created_at_ms: None,
            updated_at_ms: None,
            nonce: None,
            stroke_color: default_stroke_color(),
            fill_color: None,
            duration_override_ms: None,
        }
    }

    /// The animation group this element belongs to, if any.
    pub fn primary_group(&self) -> Option<&str> {
        self.group_ids.first().map(String::as_str)
    }

    /// Whether the element carries a fill the renderer would actually paint.
    pub fn has_fill(&self) -> bool {
        match self.fill_color.as_deref() {
            None => false,
            Some(c) => {
                let c = c.trim();
                !(c.is_empty() || c.eq_ignore_ascii_case("none") || c.eq_ignore_ascii_case("transparent"))
            }
        }
    }
}

impl Drawing {
    /// Build a drawing from elements.
    pub fn new(elements: Vec<DrawingElement>) -> Self {
        Self { elements }
    }

    /// Validate boundary invariants: unique non-empty ids, finite geometry,
    /// non-empty group ids.
    ///
    /// Missing fields are not errors here; they default downstream.
    pub fn validate(&self) -> ChalklineResult<()> {
        let mut seen = BTreeSet::new();
        for element in &self.elements {
            if element.id.trim().is_empty() {
                return Err(ChalklineError::validation("element id must be non-empty"));
            }
            if !seen.insert(element.id.as_str()) {
                return Err(ChalklineError::validation(format!(
                    "duplicate element id '{}'",
                    element.id
                )));
            }

            for (name, value) in [("x", element.x), ("y", element.y)] {
                if !value.is_finite() {
                    return Err(ChalklineError::validation(format!(
                        "element '{}' {name} must be finite",
                        element.id
                    )));
                }
            }
            for (name, value) in [("width", element.width), ("height", element.height)] {
                if let Some(v) = value
                    && !v.is_finite()
                {
                    return Err(ChalklineError::validation(format!(
                        "element '{}' {name} must be finite when set",
                        element.id
                    )));
                }
            }
            for p in &element.points {
                if !p.x.is_finite() || !p.y.is_finite() {
                    return Err(ChalklineError::validation(format!(
                        "element '{}' has a non-finite point",
                        element.id
                    )));
                }
            }
            for g in &element.group_ids {
                if g.trim().is_empty() {
                    return Err(ChalklineError::validation(format!(
                        "element '{}' has an empty group id",
                        element.id
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/model.rs"]
mod tests;
