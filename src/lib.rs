//! # Café Storefront Session Core
//!
//! > **The cart/order state machine behind a single-page café storefront.**
//!
//! This crate implements the session logic of a café storefront as an actor on
//! Tokio: a static menu catalog, an insertion-ordered cart, a checkout flow, a
//! simulated timed order-processing sequence, and a confirmation step. There is
//! no backend and no persistence; the whole session lives in one task.
//!
//! ## 🏗️ Design Philosophy
//!
//! The presentation layer treats the cart, the active dialog, and the current
//! order as global mutable state. That state is easy to corrupt when every
//! callback can reach it. Here it is owned by a single **session actor** and
//! mutated only through messages, so there is exactly one writer and no locks.
//! The view layer becomes an external observer: it reads snapshots and consumes
//! an event stream, and nothing it does can violate the session invariants.
//!
//! The one genuine correctness hazard is the processing sequence. Its stages
//! fire from timers, and a naive chain of relative delays leaks timers or fires
//! stale transitions when a run is torn down mid-flight. The
//! [`sequencer`] module instead schedules every stage as an independent timer at
//! an absolute offset, scoped to a [`ProcessingRun`](sequencer::ProcessingRun)
//! that aborts all of them as a unit on cancellation. Ticks carry their run id
//! and the actor drops anything stale, so a superseded run can never advance the
//! session.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Pure, synchronous types: [`MenuItem`](model::MenuItem) and the house catalog,
//! [`Cart`](model::Cart) with its total functions, [`Order`](model::Order) as an
//! immutable snapshot.
//!
//! ### 2. The Timers ([`sequencer`])
//! The fixed four-stage schedule and the cancellable [`ProcessingRun`](sequencer::ProcessingRun).
//!
//! ### 3. The Engine ([`session_actor`])
//! The actor that owns all session state and the phase machine
//! (browsing → checkout → processing → confirmed).
//!
//! ### 4. The Interface ([`clients`])
//! [`SessionClient`](clients::SessionClient) wraps the message passing in typed
//! async methods; no raw channels are exposed.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`Storefront`](lifecycle::Storefront) spawns the actor, hands out the event
//! stream, and coordinates graceful shutdown. Tracing setup lives here too.
//!
//! ### 6. The Boundary ([`display`])
//! Rupiah formatting for the presentation layer; the core only ever passes
//! integer minor units.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the scripted demo order with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests (timer tests use paused time and finish instantly)
//! cargo test
//! ```

pub mod clients;
pub mod display;
pub mod lifecycle;
pub mod model;
pub mod sequencer;
pub mod session_actor;
