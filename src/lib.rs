//! # matchbook
//!
//! Single-instrument limit-order matching engine with strict price-time
//! priority, modeled on the NASDAQ matching rules.
//!
//! ## Architecture
//!
//! - **Types**: `Order`, `Side`, `Execution` with a fixed wire encoding
//! - **Book**: slab-backed two-sided book with BTreeMap price levels
//! - **Engine**: the matching algorithm behind the `{submit_limit, cancel}`
//!   capability set, in two variants (default and baseline)
//! - **Trace**: benchmark trace codec, loader, and workload generator
//!
//! ## Design Principles
//!
//! 1. **Determinism**: identical input sequences produce bit-identical
//!    execution reports, checked by digesting the execution stream
//! 2. **Integer prices**: 4-decimal fixed point, no floating point anywhere
//!    in the matching path
//! 3. **Total hot path**: `submit_limit` never fails and `cancel` reports
//!    absence with a bool; validation belongs to the admission layer
//! 4. **Synchronous execution**: a single logical thread, no async, no
//!    background work

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, Side, Execution
pub mod types;

/// The two-sided resting-order book
pub mod book;

/// Matching engine variants behind the `MatchEngine` capability set
pub mod engine;

/// Benchmark trace codec, file i/o, and workload generation
pub mod trace;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use book::{Book, OrderNode, PriceLevel};
pub use engine::{BaselineEngine, Engine, MatchEngine};
pub use types::{Execution, Order, OrderId, Price, Quantity, Side, Tag};
