//! The default matching engine.
//!
//! ## Algorithm
//!
//! An incoming limit order walks the opposite side of the book in priority
//! order (best price first, FIFO within a price) for as long as it has
//! quantity left and the top of the opposite side crosses it. Each match
//! trades at the resting order's price for the smaller of the two
//! remaining quantities, emitting the passive leg then the aggressive leg.
//! Whatever survives the walk is inserted into the same side of the book
//! at its price-time position.
//!
//! ## Example
//!
//! ```
//! use matchbook::{Engine, MatchEngine, Order, Side};
//!
//! let mut engine = Engine::new();
//!
//! let resting = Order::new(0, 990_000, 100, Side::Bid, *b"AAPL", *b"B1\0\0");
//! let (bid_id, execs) = engine.submit_limit(resting);
//! assert_eq!(bid_id, 1);
//! assert!(execs.is_empty());
//!
//! let incoming = Order::new(0, 980_000, 100, Side::Ask, *b"AAPL", *b"A1\0\0");
//! let (ask_id, execs) = engine.submit_limit(incoming);
//! assert_eq!(ask_id, 2);
//! assert_eq!(execs.len(), 2);
//! assert_eq!(execs[0].id, bid_id); // passive leg first
//! assert_eq!(execs[0].price, 990_000); // traded at the resting price
//! ```

use crate::book::Book;
use crate::engine::MatchEngine;
use crate::types::{Execution, Order, OrderId};

/// Price-time-priority matching engine over a level-structured [`Book`].
#[derive(Debug)]
pub struct Engine {
    /// Resting orders on both sides
    book: Book,

    /// Next identifier to assign, starting at 1
    next_id: OrderId,
}

impl Engine {
    /// Create a new engine with an empty book
    pub fn new() -> Self {
        Self {
            book: Book::new(),
            next_id: 1,
        }
    }

    /// Create a new engine with book storage pre-allocated for `capacity`
    /// resting orders
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            book: Book::with_capacity(capacity),
            next_id: 1,
        }
    }

    /// The resting-order book
    #[inline]
    pub fn book(&self) -> &Book {
        &self.book
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchEngine for Engine {
    fn submit_limit(&mut self, mut order: Order) -> (OrderId, Vec<Execution>) {
        debug_assert!(order.quantity > 0, "zero-quantity submission");

        order.id = self.next_id;
        self.next_id += 1;

        let mut executions = Vec::new();
        let opposite = order.side.opposite();

        while !order.is_filled() {
            let Some(resting) = self.book.best(opposite).copied() else {
                break;
            };
            if !order.crosses(resting.price) {
                break;
            }

            let traded_price = resting.price;
            let traded_qty = resting.quantity.min(order.quantity);

            executions.push(Execution::leg(&resting, traded_price, traded_qty));
            executions.push(Execution::leg(&order, traded_price, traded_qty));

            order.fill(traded_qty);
            if traded_qty == resting.quantity {
                self.book.pop_best(opposite);
            } else {
                self.book.reduce_best(opposite, traded_qty);
            }
        }

        if !order.is_filled() {
            self.book.insert(order);
        }

        // cheap non-crossing check; the full walk lives in Book::validate
        debug_assert!(match (self.book.best_bid(), self.book.best_ask()) {
            (Some(bid), Some(ask)) => bid < ask,
            _ => true,
        });
        (order.id, executions)
    }

    fn cancel(&mut self, id: OrderId) -> bool {
        self.book.remove(id).is_some()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
