use serde::{Deserialize, Serialize};

use crate::model::cart::CartEntry;

/// An immutable snapshot of a confirmed cart plus customer metadata.
///
/// Built only when the processing sequence signals completion; the `items` list is
/// the copy captured at submission time, not a live view of the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub customer_name: String,
    pub table_number: String,
    pub items: Vec<CartEntry>,
    pub total: u64,
}

/// Pending order data carried through a processing run.
///
/// Holds the trimmed customer details and the cart snapshot taken when checkout
/// was submitted. It becomes an [`Order`] on completion and is discarded without
/// trace when the run is aborted.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub customer_name: String,
    pub table_number: String,
    pub items: Vec<CartEntry>,
    pub total: u64,
}

impl OrderDraft {
    pub fn into_order(self) -> Order {
        Order {
            customer_name: self.customer_name,
            table_number: self.table_number,
            items: self.items,
            total: self.total,
        }
    }
}
