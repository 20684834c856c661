use std::collections::HashSet;

use crate::models::MealId;

/// Accumulator of meal identifiers already placed into the plan being built.
///
/// Grows monotonically across one build invocation and is never persisted.
/// Insertion order is kept so the wire form the backend sees is stable.
#[derive(Debug, Default)]
pub struct ExclusionSet {
    ordered: Vec<MealId>,
    seen: HashSet<MealId>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an identifier. Re-inserting an id already present is a no-op.
    pub fn insert(&mut self, id: MealId) {
        if self.seen.insert(id.clone()) {
            self.ordered.push(id);
        }
    }

    pub fn extend(&mut self, ids: impl IntoIterator<Item = MealId>) {
        for id in ids {
            self.insert(id);
        }
    }

    pub fn contains(&self, id: &MealId) -> bool {
        self.seen.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Ordered identifier list for the `exclude_ids` request field.
    pub fn to_wire(&self) -> Vec<MealId> {
        self.ordered.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order_and_dedupes() {
        let mut set = ExclusionSet::new();
        set.insert(MealId::Int(3));
        set.insert(MealId::Int(1));
        set.insert(MealId::Int(3));
        set.insert(MealId::Text("m-9".into()));

        assert_eq!(set.len(), 3);
        assert_eq!(
            set.to_wire(),
            vec![MealId::Int(3), MealId::Int(1), MealId::Text("m-9".into())]
        );
    }

    #[test]
    fn test_contains() {
        let mut set = ExclusionSet::new();
        assert!(set.is_empty());

        set.extend([MealId::Int(1), MealId::Int(2)]);
        assert!(set.contains(&MealId::Int(2)));
        assert!(!set.contains(&MealId::Int(7)));
    }
}
