use crate::document::model::{Drawing, DrawingElement, ElementKind};
use crate::foundation::core::Point;
use crate::foundation::error::ChalklineResult;

/// Fluent constructor for a [`Drawing`].
///
/// Mostly a convenience for tests and embedding callers; external documents
/// normally arrive through Serde.
pub struct DrawingBuilder {
    elements: Vec<DrawingElement>,
}

impl DrawingBuilder {
    /// Start an empty drawing.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Append a finished element.
    pub fn element(mut self, element: DrawingElement) -> Self {
        self.elements.push(element);
        self
    }

    /// Validate and produce the drawing.
    pub fn build(self) -> ChalklineResult<Drawing> {
        let drawing = Drawing::new(self.elements);
        drawing.validate()?;
        Ok(drawing)
    }
}

impl Default for DrawingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fluent constructor for a [`DrawingElement`].
pub struct ElementBuilder {
    element: DrawingElement,
}

impl ElementBuilder {
    /// Start an element of the given kind.
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            element: DrawingElement::new(id, kind),
        }
    }

    /// Set position.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.element.x = x;
        self.element.y = y;
        self
    }

    /// Set extent.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.element.width = Some(width);
        self.element.height = Some(height);
        self
    }

    /// Set the relative point list for line-like kinds.
    pub fn points(mut self, points: Vec<Point>) -> Self {
        self.element.points = points;
        self
    }

    /// Set text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.element.text = Some(text.into());
        self
    }

    /// Append a group membership; the first call sets the primary group.
    pub fn group(mut self, group_id: impl Into<String>) -> Self {
        self.element.group_ids.push(group_id.into());
        self
    }

    /// Set the explicit order hint.
    pub fn order_hint(mut self, hint: i64) -> Self {
        self.element.order_hint = Some(hint);
        self
    }

    /// Set the creation timestamp.
    pub fn created_at(mut self, unix_ms: i64) -> Self {
        self.element.created_at_ms = Some(unix_ms);
        self
    }

    /// Set the creation nonce.
    pub fn nonce(mut self, nonce: u64) -> Self {
        self.element.nonce = Some(nonce);
        self
    }

    /// Set stroke color.
    pub fn stroke(mut self, color: impl Into<String>) -> Self {
        self.element.stroke_color = color.into();
        self
    }

    /// Set fill color (`"none"` keeps the element unfilled).
    pub fn fill(mut self, color: impl Into<String>) -> Self {
        self.element.fill_color = Some(color.into());
        self
    }

    /// Set a per-element duration override.
    pub fn duration_override(mut self, ms: u64) -> Self {
        self.element.duration_override_ms = Some(ms);
        self
    }

    /// Produce the element.
    pub fn build(self) -> DrawingElement {
        self.element
    }
}
