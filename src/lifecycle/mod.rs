//! # Session Lifecycle & Orchestration
//!
//! Starting the storefront means spawning the session actor, wiring its event
//! stream to whoever renders it, and later shutting the whole thing down without
//! losing in-flight requests. [`Storefront`] is the conductor for all of that.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the request channel
//! 2. **The actor detects closure** - `receiver.recv()` returns `None`
//! 3. **The actor cleans up** - any live processing run is dropped, which aborts
//!    its timers, and the final state is logged
//! 4. **Await completion** - [`Storefront::shutdown`] waits for the task to finish
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging for the whole application;
//! see the [`tracing`] module for the log levels and the `RUST_LOG` examples.

pub mod storefront;
pub mod tracing;

pub use self::tracing::*;
pub use storefront::*;
