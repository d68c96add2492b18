use crate::document::config::PlanConfig;
use crate::document::model::Drawing;
use crate::foundation::error::ChalklineResult;
use crate::plan::allocate::{Timeline, allocate};
use crate::plan::descriptor::AnimationDescriptor;
use crate::plan::groups::collect_groups;
use crate::plan::narration::{NarrationSegment, synchronize};
use crate::plan::order::resolve_order;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// The engine's output: a complete, renderer-ready animation plan.
pub struct AnimationPlan {
    /// Total plan duration in milliseconds.
    pub total_duration_ms: u64,
    /// Reveal events sorted by start ascending, ties in resolved element
    /// order. The renderer may rely on this ordering.
    pub descriptors: Vec<AnimationDescriptor>,
}

impl AnimationPlan {
    fn from_parts(timeline: Timeline, descriptors: Vec<AnimationDescriptor>) -> Self {
        Self {
            total_duration_ms: timeline.total_duration_ms,
            descriptors,
        }
    }
}

/// Build the base (narration-agnostic) animation plan for a drawing.
///
/// Validates the drawing and configuration up front, resolves the element
/// order, collects animation groups and allocates the schedule. Pure and
/// deterministic: equal inputs always yield an identical plan.
#[tracing::instrument(skip(drawing, config), fields(elements = drawing.elements.len()))]
pub fn plan_animation(drawing: &Drawing, config: &PlanConfig) -> ChalklineResult<AnimationPlan> {
    drawing.validate()?;
    config.validate()?;

    let ordered = resolve_order(&drawing.elements);
    let groups = collect_groups(&ordered);
    let (timeline, descriptors) = allocate(&ordered, &groups, config)?;
    Ok(AnimationPlan::from_parts(timeline, descriptors))
}

/// Build an animation plan re-timed against a measured narration track.
///
/// Runs the base allocation first, then the synchronization pass. With zero
/// segments this is exactly [`plan_animation`].
#[tracing::instrument(
    skip(drawing, segments, config),
    fields(elements = drawing.elements.len(), segments = segments.len())
)]
pub fn plan_animation_with_narration(
    drawing: &Drawing,
    segments: &[NarrationSegment],
    config: &PlanConfig,
) -> ChalklineResult<AnimationPlan> {
    drawing.validate()?;
    config.validate()?;

    let ordered = resolve_order(&drawing.elements);
    let groups = collect_groups(&ordered);
    let (base_timeline, base_descriptors) = allocate(&ordered, &groups, config)?;
    let (timeline, descriptors) = synchronize(
        &ordered,
        &groups,
        base_timeline,
        &base_descriptors,
        segments,
        config,
    )?;
    Ok(AnimationPlan::from_parts(timeline, descriptors))
}

#[cfg(test)]
#[path = "../../tests/unit/plan/pipeline.rs"]
mod tests;
