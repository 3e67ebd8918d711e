//! Pure data structures for the storefront: the menu catalog, the cart, and orders.
//!
//! Everything in here is synchronous and side-effect free. The session actor owns
//! the mutable instances; observers only ever see clones.

pub mod cart;
pub mod menu;
pub mod order;

pub use cart::*;
pub use menu::*;
pub use order::*;
