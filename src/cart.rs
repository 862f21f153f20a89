use crate::models::{CartLine, Product};
use crate::prices::parse_price;
use serde::{Deserialize, Serialize};

/// The in-memory shopping cart. Line order is insertion order and doubles
/// as the display order; serialization is the bare array of lines so the
/// persisted form stays `[{"id":7,"quantity":2}, ...]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// EMPTY state: checkout and empty-cart actions are disabled.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of a product. Re-adding an id bumps its quantity
    /// instead of appending a duplicate line.
    pub fn add(&mut self, id: u32) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine { id, quantity: 1 });
        }
    }

    /// Remove every line.
    pub fn empty(&mut self) {
        self.lines.clear();
    }

    /// Cart total in the source currency: unit price × quantity, summed.
    /// Lines whose product is not in the catalog contribute nothing.
    pub fn total_usd(&self, catalog: &[Product]) -> f64 {
        self.lines
            .iter()
            .filter_map(|line| {
                catalog
                    .iter()
                    .find(|product| product.id == line.id)
                    .map(|product| parse_price(&product.price) * line.quantity as f64)
            })
            .sum()
    }
}
