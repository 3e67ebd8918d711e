//! # Observability & Tracing
//!
//! Structured logging for the storefront via the `tracing` crate.
//!
//! The format is compact and hides module paths (`with_target(false)`); the
//! structured fields carry the interesting context instead: item ids, run ids,
//! stage labels, totals.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup, shutdown, and final cart state
//! - **Cart operations**: adds, quantity edits, removals, with running totals
//! - **Checkout flow**: submissions, rejections with the offending phase
//! - **Processing runs**: start, every stage reached, completion, cancellation
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show request payloads as they enter the client
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a full order looks like:
//!
//! ```text
//! INFO Cart updated items=3 total=55000
//! INFO Checkout started items=3
//! INFO Checkout submitted, processing started id=run_1 customer=Budi table=5 total=55000
//! INFO Stage reached run=run_1 stage=0 label="Processing order"
//! INFO Stage reached run=run_1 stage=3 label="Order ready"
//! INFO Order confirmed run=run_1 customer=Budi total=55000
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - the structured fields carry context
        .compact()
        .init();
}
