use serde::{Deserialize, Serialize};

use crate::model::menu::MenuItem;

/// One line of the cart: a menu item and how many of it are wanted.
///
/// Quantity is always at least 1. A line that should disappear is removed from the
/// cart explicitly, never by driving its quantity to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartEntry {
    fn new(item: MenuItem) -> Self {
        Self { item, quantity: 1 }
    }

    /// Price × quantity for this line, in minor units.
    pub fn line_total(&self) -> u64 {
        u64::from(self.item.price) * u64::from(self.quantity)
    }
}

/// The in-progress, unconfirmed selection of items.
///
/// Entries keep insertion order: the first-added item stays first no matter how its
/// quantity changes later. At most one entry exists per item id; adding an item
/// that is already present bumps its quantity in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds one unit of `item`: increments the existing line in place, or appends
    /// a fresh line with quantity 1.
    pub fn add(&mut self, item: MenuItem) {
        match self.entries.iter_mut().find(|entry| entry.item.id == item.id) {
            Some(entry) => entry.quantity += 1,
            None => self.entries.push(CartEntry::new(item)),
        }
    }

    /// Sets the quantity of the line with `item_id`, clamped to a minimum of 1.
    /// Unknown ids are ignored.
    pub fn update_quantity(&mut self, item_id: &str, quantity: u32) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.item.id == item_id) {
            entry.quantity = quantity.max(1);
        }
    }

    /// Removes the line with `item_id` if present. Re-adding the item later
    /// appends it at the end again with quantity 1.
    pub fn remove(&mut self, item_id: &str) {
        self.entries.retain(|entry| entry.item.id != item_id);
    }

    /// Empties the cart. Invoked by the session once an order is confirmed.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Total number of units across all lines (the cart badge).
    pub fn total_quantity(&self) -> u32 {
        self.entries.iter().map(|entry| entry.quantity).sum()
    }

    /// Sum of line totals, in minor units. 0 for the empty cart.
    pub fn total_price(&self) -> u64 {
        self.entries.iter().map(CartEntry::line_total).sum()
    }
}
