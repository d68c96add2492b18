use crate::foundation::error::{ChalklineError, ChalklineResult};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// All scheduling tunables in one value object.
///
/// Every field has a documented default; [`PlanConfig::validate`] runs before
/// any allocation so scheduling arithmetic only ever sees vetted numbers.
pub struct PlanConfig {
    /// Total time budget for one multi-member group.
    #[serde(default = "default_group_duration_ms")]
    pub group_duration_ms: u64,
    /// Slot for one ungrouped element without an override.
    #[serde(default = "default_individual_duration_ms")]
    pub individual_duration_ms: u64,
    /// Fraction of a polygon element's slot spent on the stroke; the
    /// remainder goes to the fill.
    #[serde(default = "default_stroke_fill_ratio")]
    pub stroke_fill_ratio: f64,
    /// Silence before the first reveal.
    #[serde(default = "default_leading_margin_ms")]
    pub leading_margin_ms: u64,
    /// Settle time after the last reveal.
    #[serde(default = "default_trailing_margin_ms")]
    pub trailing_margin_ms: u64,
    /// Floor for the total plan duration, covering degenerate documents.
    #[serde(default = "default_min_total_duration_ms")]
    pub min_total_duration_ms: u64,
    /// Pause inserted between consecutive narration segments.
    #[serde(default = "default_narration_pause_ms")]
    pub narration_pause_ms: u64,
    /// Clamp bounds `(min, max)` for the narration speed factor.
    #[serde(default = "default_speed_factor_bounds")]
    pub speed_factor_bounds: (f64, f64),
}

fn default_group_duration_ms() -> u64 {
    5000
}

fn default_individual_duration_ms() -> u64 {
    500
}

fn default_stroke_fill_ratio() -> f64 {
    0.75
}

fn default_leading_margin_ms() -> u64 {
    1000
}

fn default_trailing_margin_ms() -> u64 {
    1000
}

fn default_min_total_duration_ms() -> u64 {
    3000
}

fn default_narration_pause_ms() -> u64 {
    500
}

fn default_speed_factor_bounds() -> (f64, f64) {
    (0.5, 2.0)
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            group_duration_ms: default_group_duration_ms(),
            individual_duration_ms: default_individual_duration_ms(),
            stroke_fill_ratio: default_stroke_fill_ratio(),
            leading_margin_ms: default_leading_margin_ms(),
            trailing_margin_ms: default_trailing_margin_ms(),
            min_total_duration_ms: default_min_total_duration_ms(),
            narration_pause_ms: default_narration_pause_ms(),
            speed_factor_bounds: default_speed_factor_bounds(),
        }
    }
}

impl PlanConfig {
    /// Validate tunable invariants.
    pub fn validate(&self) -> ChalklineResult<()> {
        if self.group_duration_ms == 0 {
            return Err(ChalklineError::validation("group_duration_ms must be > 0"));
        }
        if self.individual_duration_ms == 0 {
            return Err(ChalklineError::validation(
                "individual_duration_ms must be > 0",
            ));
        }
        if !self.stroke_fill_ratio.is_finite()
            || self.stroke_fill_ratio <= 0.0
            || self.stroke_fill_ratio > 1.0
        {
            return Err(ChalklineError::validation(
                "stroke_fill_ratio must be finite and within (0, 1]",
            ));
        }
        let (lo, hi) = self.speed_factor_bounds;
        if !lo.is_finite() || !hi.is_finite() || lo <= 0.0 || lo > hi {
            return Err(ChalklineError::validation(
                "speed_factor_bounds must be finite with 0 < min <= max",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/config.rs"]
mod tests;
