use crate::foundation::error::{ChalklineError, ChalklineResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// An absolute timeline position in whole milliseconds.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct TimeMs(pub u64);

impl TimeMs {
    /// Advance by a duration, saturating at the numeric ceiling.
    pub fn advance(self, by_ms: u64) -> TimeMs {
        TimeMs(self.0.saturating_add(by_ms))
    }
}

/// A half-open span `[start, start + duration)` on the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimeSpan {
    /// Span start.
    pub start: TimeMs,
    /// Span length in milliseconds; zero is legal (instantaneous).
    pub duration_ms: u64,
}

impl TimeSpan {
    /// Build a span from start and duration.
    pub fn new(start: TimeMs, duration_ms: u64) -> Self {
        Self { start, duration_ms }
    }

    /// Exclusive end of the span.
    pub fn end(self) -> TimeMs {
        self.start.advance(self.duration_ms)
    }

    /// Whether `t` falls inside the span.
    pub fn contains(self, t: TimeMs) -> bool {
        self.start <= t && t < self.end()
    }

    /// Whether two spans share any instant. Zero-duration spans are empty
    /// and overlap nothing.
    pub fn overlaps(self, other: TimeSpan) -> bool {
        self.start.max(other.start) < self.end().min(other.end())
    }

    /// Split the span at a fraction in `[0, 1]`, returning `(head, tail)`.
    ///
    /// The head receives the rounded share so the two parts always cover the
    /// full duration with no gap and no overlap.
    pub fn split_at_fraction(self, fraction: f64) -> ChalklineResult<(TimeSpan, TimeSpan)> {
        if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
            return Err(ChalklineError::validation(
                "TimeSpan split fraction must be finite and within [0, 1]",
            ));
        }
        let head_ms = ((self.duration_ms as f64) * fraction).round() as u64;
        let head_ms = head_ms.min(self.duration_ms);
        let head = TimeSpan::new(self.start, head_ms);
        let tail = TimeSpan::new(head.end(), self.duration_ms - head_ms);
        Ok((head, tail))
    }
}

/// Rounded integer division used for even millisecond shares.
///
/// Returns 0 when `den` is 0; schedule arithmetic never divides by a member
/// count it did not check, but defaulting keeps the helper total.
pub fn div_round(num: u64, den: u64) -> u64 {
    if den == 0 {
        return 0;
    }
    (num + den / 2) / den
}
