use crate::error::{PulseError, Result};
use crate::model::{Product, ProductId};

pub const MAX_COMPARE: usize = 4;
pub const MIN_COMPARE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Nothing selected; compare bar hidden.
    Empty,
    /// One to four products held; compare bar visible.
    Selecting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadySelected,
    Full,
}

/// Products picked for side-by-side comparison, in pick order, unique by name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    items: Vec<Product>,
}

impl Selection {
    pub fn add(&mut self, product: Product) -> AddOutcome {
        if self.contains(product.key()) {
            return AddOutcome::AlreadySelected;
        }
        if self.is_full() {
            return AddOutcome::Full;
        }
        self.items.push(product);
        AddOutcome::Added
    }

    /// Remove by name. Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.key() != name);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|p| p.key() == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_COMPARE
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn state(&self) -> SelectionState {
        if self.items.is_empty() {
            SelectionState::Empty
        } else {
            SelectionState::Selecting
        }
    }

    /// Compare action is only enabled with at least two products.
    pub fn can_compare(&self) -> bool {
        self.items.len() >= MIN_COMPARE
    }

    /// Whether a card's checkbox may be toggled. Selected products stay
    /// toggleable so they can be removed.
    pub fn can_toggle(&self, name: &str) -> bool {
        !self.is_full() || self.contains(name)
    }

    pub fn product_ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|p| p.id).collect()
    }

    /// Ids to send to `/api/compare`, or a validation error when the
    /// selection is out of the 2..=4 range.
    pub fn validate_for_compare(&self) -> Result<Vec<ProductId>> {
        if self.items.len() < MIN_COMPARE {
            return Err(PulseError::Validation(
                "Please select at least 2 products to compare.".to_string(),
            ));
        }
        if self.items.len() > MAX_COMPARE {
            return Err(PulseError::Validation(format!(
                "You can compare up to {} products at once.",
                MAX_COMPARE
            )));
        }
        Ok(self.product_ids())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId, name: &str) -> Product {
        Product {
            id,
            product_name: name.to_string(),
            ..Default::default()
        }
    }

    fn selection_of(n: usize) -> Selection {
        let mut sel = Selection::default();
        for i in 0..n {
            sel.add(product(i as ProductId, &format!("P{}", i)));
        }
        sel
    }

    #[test]
    fn test_starts_empty() {
        let sel = Selection::default();
        assert_eq!(sel.state(), SelectionState::Empty);
        assert!(!sel.can_compare());
    }

    #[test]
    fn test_add_transitions_to_selecting() {
        let mut sel = Selection::default();
        assert_eq!(sel.add(product(1, "A")), AddOutcome::Added);
        assert_eq!(sel.state(), SelectionState::Selecting);
        assert!(!sel.can_compare());
        sel.add(product(2, "B"));
        assert!(sel.can_compare());
    }

    #[test]
    fn test_duplicate_name_is_noop() {
        let mut sel = Selection::default();
        sel.add(product(1, "A"));
        assert_eq!(sel.add(product(99, "A")), AddOutcome::AlreadySelected);
        assert_eq!(sel.len(), 1);
        assert_eq!(sel.product_ids(), vec![1]);
    }

    #[test]
    fn test_fifth_add_is_rejected() {
        let mut sel = selection_of(4);
        let before = sel.clone();
        assert_eq!(sel.add(product(5, "P5")), AddOutcome::Full);
        assert_eq!(sel, before);
        assert_eq!(sel.len(), MAX_COMPARE);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut sel = selection_of(2);
        assert!(sel.remove("P0"));
        assert!(!sel.remove("P0"));
        assert!(!sel.remove("missing"));
        assert_eq!(sel.len(), 1);
        assert!(sel.remove("P1"));
        assert_eq!(sel.state(), SelectionState::Empty);
    }

    #[test]
    fn test_toggle_enablement_at_capacity() {
        let sel = selection_of(4);
        assert!(sel.can_toggle("P2"));
        assert!(!sel.can_toggle("Other"));

        let sel = selection_of(3);
        assert!(sel.can_toggle("Other"));
    }

    #[test]
    fn test_clear_reenables_everything() {
        let mut sel = selection_of(4);
        sel.clear();
        assert!(sel.is_empty());
        assert!(sel.can_toggle("Other"));
    }

    #[test]
    fn test_validate_for_compare() {
        let err = selection_of(1).validate_for_compare().unwrap_err();
        assert!(matches!(err, PulseError::Validation(_)));

        let ids = selection_of(3).validate_for_compare().unwrap();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_preserves_pick_order() {
        let mut sel = Selection::default();
        sel.add(product(9, "Z"));
        sel.add(product(3, "A"));
        let names: Vec<_> = sel.items().iter().map(|p| p.product_name.as_str()).collect();
        assert_eq!(names, vec!["Z", "A"]);
    }
}
