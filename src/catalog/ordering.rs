use crate::models::ProjectItem;

/// Reorder resolved items according to the persisted display order.
///
/// Stable partial sort: titles named in the order list are placed first in
/// that exact sequence, and every remaining item is appended in its original
/// encounter order. Order entries whose title no longer resolves are skipped
/// silently, so stale lists cannot fail a render.
pub fn apply_display_order(items: Vec<ProjectItem>, order: &[String]) -> Vec<ProjectItem> {
    if order.is_empty() {
        return items;
    }

    let mut remaining: Vec<Option<ProjectItem>> = items.into_iter().map(Some).collect();
    let mut ordered = Vec::with_capacity(remaining.len());

    for title in order {
        let matched = remaining
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|item| item.title == *title));
        if let Some(slot) = matched {
            ordered.extend(slot.take());
        }
    }

    ordered.extend(remaining.into_iter().flatten());
    ordered
}
