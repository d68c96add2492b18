use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::document::config::PlanConfig;
use crate::document::model::DrawingElement;
use crate::foundation::core::{TimeMs, TimeSpan, div_round};
use crate::foundation::error::ChalklineResult;
use crate::plan::allocate::Timeline;
use crate::plan::descriptor::{AnimationDescriptor, describe};
use crate::plan::groups::AnimationGroup;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One measured narration segment, bound to one animation group.
pub struct NarrationSegment {
    /// The animation group this segment narrates.
    pub group_id: String,
    /// Spoken text (carried for callers; scheduling only uses the duration).
    #[serde(default)]
    pub text: String,
    /// Measured audio duration in milliseconds.
    pub audio_duration_ms: u64,
}

/// Re-time the base schedule against a narration track.
///
/// Each segment, in its given order, spreads its measured audio duration
/// evenly over its group's members at a running narration cursor, with the
/// configured pause between consecutive segments. A segment naming an
/// unknown group, or repeating a group an earlier segment already timed,
/// covers zero elements: logged, skipped, nothing advances.
/// Elements no segment covers are appended after all narration material as
/// individual slots, their durations divided by the clamped speed factor
/// (base-over-narration duration ratio) so the piece keeps one visual pace.
///
/// Zero segments degenerates to the base schedule unchanged.
#[tracing::instrument(skip_all, fields(segments = segments.len()))]
pub fn synchronize(
    ordered: &[DrawingElement],
    groups: &BTreeMap<String, AnimationGroup>,
    base_timeline: Timeline,
    base_descriptors: &[AnimationDescriptor],
    segments: &[NarrationSegment],
    config: &PlanConfig,
) -> ChalklineResult<(Timeline, Vec<AnimationDescriptor>)> {
    config.validate()?;

    if segments.is_empty() {
        return Ok((base_timeline, base_descriptors.to_vec()));
    }

    let by_id: HashMap<&str, &DrawingElement> =
        ordered.iter().map(|e| (e.id.as_str(), e)).collect();
    let base_durations = base_element_durations(base_descriptors);

    // (element, span, group back-reference) pairs of the corrected schedule.
    let mut slots: Vec<(&DrawingElement, TimeSpan, Option<&str>)> = Vec::new();
    let mut covered: BTreeSet<&str> = BTreeSet::new();
    let mut consumed_groups: BTreeSet<&str> = BTreeSet::new();
    let mut cursor = TimeMs(config.leading_margin_ms);
    let mut matched_any = false;
    let mut narration_sum: u64 = 0;

    for segment in segments {
        let Some(group) = groups.get(&segment.group_id) else {
            tracing::warn!(
                group_id = %segment.group_id,
                "narration segment references unknown group; skipping"
            );
            continue;
        };
        if !consumed_groups.insert(group.group_id.as_str()) {
            tracing::warn!(
                group_id = %group.group_id,
                "narration segment repeats an already timed group; skipping"
            );
            continue;
        }
        if matched_any {
            cursor = cursor.advance(config.narration_pause_ms);
        }
        matched_any = true;

        let share = div_round(segment.audio_duration_ms, group.len() as u64);
        for member_id in &group.member_ids {
            let Some(member) = by_id.get(member_id.as_str()).copied() else {
                continue;
            };
            slots.push((
                member,
                TimeSpan::new(cursor, share),
                Some(group.group_id.as_str()),
            ));
            covered.insert(member.id.as_str());
            cursor = cursor.advance(share);
            narration_sum += share;
        }
    }

    let base_sum: u64 = covered
        .iter()
        .map(|id| base_durations.get(id).copied().unwrap_or(0))
        .sum();
    let speed_factor = clamp_speed_factor(base_sum, narration_sum, config.speed_factor_bounds);

    for element in ordered {
        if covered.contains(element.id.as_str()) {
            continue;
        }
        let slot_ms = element
            .duration_override_ms
            .unwrap_or(config.individual_duration_ms);
        let duration_ms = ((slot_ms as f64) / speed_factor).round() as u64;
        slots.push((
            element,
            TimeSpan::new(cursor, duration_ms),
            element.primary_group(),
        ));
        cursor = cursor.advance(duration_ms);
    }

    let total_duration_ms = cursor
        .advance(config.trailing_margin_ms)
        .0
        .max(config.min_total_duration_ms);

    let mut descriptors = Vec::new();
    for (element, span, group_id) in slots {
        descriptors.extend(describe(element, span, group_id, config)?);
    }
    descriptors.sort_by_key(|d| d.span.start);

    tracing::debug!(
        covered = covered.len(),
        speed_factor,
        total_duration_ms,
        "synchronized schedule to narration"
    );

    Ok((
        Timeline {
            cursor,
            total_duration_ms,
        },
        descriptors,
    ))
}

/// Derive the clamped visual speed factor from covered-element durations.
///
/// Degenerate sums (nothing covered, or a zero-length narration) resolve to
/// 1.0 rather than propagating an infinity or NaN into duration arithmetic.
pub fn clamp_speed_factor(base_sum_ms: u64, narration_sum_ms: u64, bounds: (f64, f64)) -> f64 {
    if base_sum_ms == 0 || narration_sum_ms == 0 {
        return 1.0;
    }
    let factor = (base_sum_ms as f64) / (narration_sum_ms as f64);
    factor.clamp(bounds.0, bounds.1)
}

/// Full reveal span length of each element in the base schedule.
fn base_element_durations(descriptors: &[AnimationDescriptor]) -> BTreeMap<&str, u64> {
    let mut spans: BTreeMap<&str, (TimeMs, TimeMs)> = BTreeMap::new();
    for d in descriptors {
        let entry = spans
            .entry(d.element_id.as_str())
            .or_insert((d.span.start, d.span.end()));
        entry.0 = entry.0.min(d.span.start);
        entry.1 = entry.1.max(d.span.end());
    }
    spans
        .into_iter()
        .map(|(id, (start, end))| (id, end.0.saturating_sub(start.0)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/plan/narration.rs"]
mod tests;
