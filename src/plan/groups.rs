use std::collections::BTreeMap;

use crate::document::model::DrawingElement;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A maximal run of elements animated together as one unit.
pub struct AnimationGroup {
    /// Group identifier (the members' shared primary group id).
    pub group_id: String,
    /// Member element ids in first-encounter order of the resolved sequence.
    pub member_ids: Vec<String>,
}

impl AnimationGroup {
    /// Number of members.
    pub fn len(&self) -> usize {
        self.member_ids.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.member_ids.is_empty()
    }
}

/// Partition resolved elements into animation groups.
///
/// Single linear pass: each element that declares group memberships joins its
/// primary (first) group, created on first sight; later members append in
/// resolved order, regardless of how the authoring metadata ordered them.
/// Elements without memberships are not placed in any group — the allocator
/// schedules them individually.
pub fn collect_groups(ordered: &[DrawingElement]) -> BTreeMap<String, AnimationGroup> {
    let mut groups: BTreeMap<String, AnimationGroup> = BTreeMap::new();
    for element in ordered {
        let Some(group_id) = element.primary_group() else {
            continue;
        };
        groups
            .entry(group_id.to_string())
            .or_insert_with(|| AnimationGroup {
                group_id: group_id.to_string(),
                member_ids: Vec::new(),
            })
            .member_ids
            .push(element.id.clone());
    }
    groups
}

#[cfg(test)]
#[path = "../../tests/unit/plan/groups.rs"]
mod tests;
