//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber once per process.
//!
//! Log lines use the compact format without module paths (`with_target(false)`); the
//! actor loop adds an `entity_type` field instead, so a line reads
//! `INFO Action ok entity_type="CartState"` rather than a full module path.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started`, `Shutdown` with the number of handled actions
//! - **Requests**: `Get` / `Action` at debug level, including the action payload
//! - **State changes**: cart restored/added/removed, theme applied, checkout phases
//! - **Degradations**: malformed stored values and failed writes as warnings
//!
//! ## Usage Examples
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run
//! RUST_LOG=storefront_state::checkout_actor=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`** a checkout reads:
//!
//! ```text
//! INFO checkout: Settling payment order_id=ORD-1700000000000-3f9a1c2e total=328.90 items=1
//! INFO checkout: Cleared
//! INFO checkout: Order committed order_id=ORD-1700000000000-3f9a1c2e
//! ```

/// Install the global subscriber. Filter comes from `RUST_LOG`.
///
/// Call once, at the top of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
