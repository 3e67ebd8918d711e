//! Type-safe client for the session actor.

pub mod session_client;

pub use session_client::*;
