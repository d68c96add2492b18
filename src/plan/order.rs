use crate::document::model::DrawingElement;

/// Resolve the total reveal order over a drawing's elements.
///
/// Elements are keyed by their explicit order hint (absent hints sort as 0),
/// then by creation timestamp, then by creation nonce, then by original array
/// position. The composite key makes the order total and deterministic:
/// equal inputs always produce the same sequence, never one that depends on
/// iteration order.
///
/// Pure function over a copy; the caller's slice is untouched.
pub fn resolve_order(elements: &[DrawingElement]) -> Vec<DrawingElement> {
    let mut keyed: Vec<(OrderKey, DrawingElement)> = elements
        .iter()
        .enumerate()
        .map(|(index, e)| (order_key(e, index), e.clone()))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, e)| e).collect()
}

/// Composite sort key; field order is the tie-break chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OrderKey {
    hint: i64,
    created_at_ms: i64,
    nonce: u64,
    index: usize,
}

fn order_key(element: &DrawingElement, index: usize) -> OrderKey {
    OrderKey {
        hint: element.order_hint.unwrap_or(0),
        // Absent timestamps sort after any real one, falling through to the
        // nonce and then the original position.
        created_at_ms: element.created_at_ms.unwrap_or(i64::MAX),
        nonce: element.nonce.unwrap_or(u64::MAX),
        index,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/order.rs"]
mod tests;
