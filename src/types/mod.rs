//! Core data types for the matchbook engine.
//!
//! ## Types
//!
//! - [`Order`]: a limit order (the only first-class entity)
//! - [`Side`]: Bid or Ask
//! - [`Execution`]: one leg of a trade
//!
//! ## Fixed-Point Prices
//!
//! Prices carry 4 implied decimal places (1 unit = 0.0001); see the
//! [`price`] module for conversions.

mod execution;
mod order;
pub mod price;

// Re-export all types at module level
pub use execution::Execution;
pub use order::{Order, OrderId, Price, Quantity, Side, Tag, ORDER_WIRE_LEN};
