use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::document::config::PlanConfig;
use crate::document::model::DrawingElement;
use crate::foundation::core::{TimeMs, TimeSpan, div_round};
use crate::foundation::error::ChalklineResult;
use crate::plan::descriptor::{AnimationDescriptor, describe};
use crate::plan::groups::AnimationGroup;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Running allocation state, frozen into the result.
pub struct Timeline {
    /// Final cursor position after the last scheduled element.
    pub cursor: TimeMs,
    /// Total plan duration: cursor plus trailing margin, floored at the
    /// configured minimum.
    pub total_duration_ms: u64,
}

/// Allocate the base, narration-agnostic schedule.
///
/// Walks resolved elements behind a monotonically advancing cursor that
/// starts at the leading margin. A group is scheduled in one contiguous block
/// at the point its first member is reached: the group budget is divided by
/// `member_count + 1` (the extra share is trailing settle time) and each
/// member animates sequentially on its share. Ungrouped elements take their
/// override duration or the individual default. Already-scheduled groups are
/// tracked in an explicit set, so later encounters of their members are
/// skipped.
///
/// Never fails mid-walk: degenerate inputs (empty drawing, one-member group,
/// missing geometry) degrade to documented defaults, and an empty element
/// list yields the minimum total duration with zero descriptors.
#[tracing::instrument(skip(ordered, groups, config))]
pub fn allocate(
    ordered: &[DrawingElement],
    groups: &BTreeMap<String, AnimationGroup>,
    config: &PlanConfig,
) -> ChalklineResult<(Timeline, Vec<AnimationDescriptor>)> {
    config.validate()?;

    let by_id: HashMap<&str, &DrawingElement> =
        ordered.iter().map(|e| (e.id.as_str(), e)).collect();

    let mut cursor = TimeMs(config.leading_margin_ms);
    let mut scheduled_groups: BTreeSet<&str> = BTreeSet::new();
    let mut descriptors = Vec::new();

    for element in ordered {
        match element.primary_group().and_then(|gid| groups.get(gid)) {
            Some(group) => {
                if !scheduled_groups.insert(group.group_id.as_str()) {
                    continue; // group already scheduled at its first member
                }
                let share = div_round(config.group_duration_ms, group.len() as u64 + 1);
                for member_id in &group.member_ids {
                    let Some(member) = by_id.get(member_id.as_str()).copied() else {
                        continue;
                    };
                    let span = TimeSpan::new(cursor, share);
                    descriptors.extend(describe(member, span, Some(group.group_id.as_str()), config)?);
                    cursor = cursor.advance(share);
                }
            }
            None => {
                let duration_ms = element
                    .duration_override_ms
                    .unwrap_or(config.individual_duration_ms);
                let span = TimeSpan::new(cursor, duration_ms);
                descriptors.extend(describe(element, span, None, config)?);
                cursor = cursor.advance(duration_ms);
            }
        }
    }

    let total_duration_ms = cursor
        .advance(config.trailing_margin_ms)
        .0
        .max(config.min_total_duration_ms);

    // Emission order is already cursor-monotone; the stable sort pins the
    // output contract (start ascending, ties in resolved order).
    descriptors.sort_by_key(|d| d.span.start);

    tracing::debug!(
        elements = ordered.len(),
        groups = scheduled_groups.len(),
        descriptors = descriptors.len(),
        total_duration_ms,
        "allocated base schedule"
    );

    Ok((
        Timeline {
            cursor,
            total_duration_ms,
        },
        descriptors,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/plan/allocate.rs"]
mod tests;
