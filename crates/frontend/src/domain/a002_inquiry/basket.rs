//! Products the visitor wants a quote for.
//!
//! Provided as context by the app root. The catalog adds to it, the contact
//! form reads and edits it.

use contracts::domain::a002_inquiry::validation::PRODUCTS_MAX;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct QuoteBasket {
    ids: RwSignal<Vec<i32>>,
}

impl QuoteBasket {
    pub fn new() -> Self {
        Self {
            ids: RwSignal::new(Vec::new()),
        }
    }

    /// Current ids without subscribing the caller
    pub fn snapshot(&self) -> Vec<i32> {
        self.ids.get_untracked()
    }

    pub fn contains(&self, id: i32) -> bool {
        self.ids.with(|ids| ids.contains(&id))
    }

    pub fn len(&self) -> usize {
        self.ids.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn add(&self, id: i32) {
        self.ids.update(|ids| {
            add_id(ids, id);
        });
    }

    pub fn toggle(&self, id: i32) {
        self.ids.update(|ids| toggle_id(ids, id));
    }

    pub fn clear(&self) {
        self.ids.set(Vec::new());
    }
}

impl Default for QuoteBasket {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_quote_basket() -> QuoteBasket {
    use_context::<QuoteBasket>().unwrap_or_else(|| {
        log::warn!("QuoteBasket context missing, using a detached basket");
        QuoteBasket::new()
    })
}

/// Appends `id` unless present or the basket is full. Returns whether it was added.
fn add_id(ids: &mut Vec<i32>, id: i32) -> bool {
    if ids.contains(&id) || ids.len() >= PRODUCTS_MAX {
        return false;
    }
    ids.push(id);
    true
}

fn toggle_id(ids: &mut Vec<i32>, id: i32) {
    if let Some(pos) = ids.iter().position(|x| *x == id) {
        ids.remove(pos);
    } else {
        add_id(ids, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_order_and_ignores_duplicates() {
        let mut ids = vec![];
        assert!(add_id(&mut ids, 4));
        assert!(add_id(&mut ids, 2));
        assert!(!add_id(&mut ids, 4));
        assert_eq!(ids, vec![4, 2]);
    }

    #[test]
    fn toggle_removes_then_re_adds() {
        let mut ids = vec![1, 2, 3];
        toggle_id(&mut ids, 2);
        assert_eq!(ids, vec![1, 3]);
        toggle_id(&mut ids, 2);
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn basket_stops_at_the_product_limit() {
        let mut ids: Vec<i32> = (0..PRODUCTS_MAX as i32).collect();
        assert!(!add_id(&mut ids, 999));
        assert_eq!(ids.len(), PRODUCTS_MAX);
    }
}
