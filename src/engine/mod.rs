//! Matching engine variants.
//!
//! ## Capability Set
//!
//! Every engine exposes exactly two operations, both total on the hot
//! path: [`submit_limit`](MatchEngine::submit_limit) and
//! [`cancel`](MatchEngine::cancel). Input validation belongs to the
//! admission layer in front of the engine, not here.
//!
//! ## Variants
//!
//! - [`Engine`]: the default engine; slab-backed book with BTreeMap price
//!   levels and an id index for O(log n) operations throughout
//! - [`BaselineEngine`]: flat sorted sequence per side; the benchmark
//!   lower bound
//!
//! Both variants produce identical execution reports for identical input
//! sequences. The benchmark harness dispatches statically over this trait.
//!
//! ## Matching Rules
//!
//! - Bids match against asks priced at or below their limit; asks match
//!   against bids priced at or above. Equal prices cross.
//! - Resting orders are consumed best price first, FIFO within a price.
//! - The traded price is always the resting order's price.
//! - Each match emits the passive leg, then the aggressive leg.
//! - Residual quantity rests on the incoming order's own side.

pub mod baseline;
pub mod matcher;

pub use baseline::BaselineEngine;
pub use matcher::Engine;

use crate::types::{Execution, Order, OrderId};

/// The engine capability set: submit a limit order, cancel by id.
pub trait MatchEngine {
    /// Accept a limit order, match it, and rest any residual.
    ///
    /// Assigns the next identifier (monotonic from 1, gap-free, never
    /// reissued) regardless of how the order fares; the input `order.id`
    /// is ignored. Returns the assigned id and the execution report, two
    /// legs per match in the order the matches occurred, passive leg
    /// first. The operation is total: `order.quantity > 0` and a valid
    /// side are caller obligations.
    fn submit_limit(&mut self, order: Order) -> (OrderId, Vec<Execution>);

    /// Remove the resting order with this id from whichever side holds it.
    ///
    /// Returns true iff a resting order was found and removed. A fully
    /// filled, already cancelled, or never-assigned id returns false; the
    /// engine does not distinguish the three.
    fn cancel(&mut self, id: OrderId) -> bool;
}
