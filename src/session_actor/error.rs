//! Error types for the session actor.

use thiserror::Error;

use crate::session_actor::PhaseKind;

/// Errors that can occur during session operations.
///
/// Cart operations are total functions and only ever fail on channel problems;
/// the remaining variants guard the checkout flow. Aborting a processing run is
/// a silent success, never an error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// The session actor is gone and no longer accepts requests.
    #[error("session closed")]
    Closed,

    /// The session actor dropped the response channel.
    #[error("session dropped the response channel")]
    Dropped,

    /// Checkout was submitted with a blank customer name.
    #[error("customer name must not be empty")]
    EmptyCustomerName,

    /// Checkout was submitted with a blank table number.
    #[error("table number must not be empty")]
    EmptyTableNumber,

    /// Checkout cannot start with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// A flow operation was issued in a phase where it does not apply.
    #[error("operation not valid in the {0} phase")]
    InvalidPhase(PhaseKind),
}
