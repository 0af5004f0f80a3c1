//! Baseline engine: flat sorted sequence per side.
//!
//! A deliberately simple realisation kept as the benchmark lower bound and
//! as an independent oracle for the default engine. Each side is a single
//! `Vec<Order>` held in priority order (best first), so matching pops from
//! the front, resting inserts by binary search, and cancel scans linearly.
//! Semantics are identical to [`Engine`](crate::engine::Engine); only the
//! complexity differs.

use std::cmp::Reverse;

use crate::engine::MatchEngine;
use crate::types::{Execution, Order, OrderId, Side};

/// Matching engine over flat sorted order sequences.
#[derive(Debug)]
pub struct BaselineEngine {
    /// Next identifier to assign, starting at 1
    next_id: OrderId,

    /// Resting bids, best (highest price, lowest id) first
    bids: Vec<Order>,

    /// Resting asks, best (lowest price, lowest id) first
    asks: Vec<Order>,
}

impl Default for BaselineEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BaselineEngine {
    /// Create a new engine with empty sides
    pub fn new() -> Self {
        Self {
            next_id: 1,
            bids: Vec::new(),
            asks: Vec::new(),
        }
    }

    /// Total number of resting orders on both sides
    pub fn len(&self) -> usize {
        self.bids.len() + self.asks.len()
    }

    /// Check if neither side holds any orders
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Insert a residual at its price-time position
    fn rest(&mut self, order: Order) {
        match order.side {
            Side::Bid => {
                let pos = self
                    .bids
                    .binary_search_by_key(&(Reverse(order.price), order.id), |o| {
                        (Reverse(o.price), o.id)
                    })
                    .unwrap_or_else(|pos| pos);
                self.bids.insert(pos, order);
            }
            Side::Ask => {
                let pos = self
                    .asks
                    .binary_search_by_key(&(order.price, order.id), |o| (o.price, o.id))
                    .unwrap_or_else(|pos| pos);
                self.asks.insert(pos, order);
            }
        }
    }
}

impl MatchEngine for BaselineEngine {
    fn submit_limit(&mut self, mut order: Order) -> (OrderId, Vec<Execution>) {
        debug_assert!(order.quantity > 0, "zero-quantity submission");

        order.id = self.next_id;
        self.next_id += 1;

        let mut executions = Vec::new();
        let opposite = match order.side {
            Side::Bid => &mut self.asks,
            Side::Ask => &mut self.bids,
        };

        while !order.is_filled() {
            let Some(resting) = opposite.first_mut() else {
                break;
            };
            if !order.crosses(resting.price) {
                break;
            }

            let traded_price = resting.price;
            let traded_qty = resting.quantity.min(order.quantity);

            executions.push(Execution::leg(resting, traded_price, traded_qty));
            executions.push(Execution::leg(&order, traded_price, traded_qty));

            order.fill(traded_qty);
            resting.fill(traded_qty);
            if resting.is_filled() {
                opposite.remove(0);
            }
        }

        if !order.is_filled() {
            self.rest(order);
        }

        (order.id, executions)
    }

    fn cancel(&mut self, id: OrderId) -> bool {
        if let Some(pos) = self.bids.iter().position(|o| o.id == id) {
            self.bids.remove(pos);
            return true;
        }
        if let Some(pos) = self.asks.iter().position(|o| o.id == id) {
            self.asks.remove(pos);
            return true;
        }
        false
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const INSTR: [u8; 4] = *b"AAPL";
    const A1: [u8; 4] = *b"A1\0\0";
    const B1: [u8; 4] = *b"B1\0\0";

    fn limit(price: u64, quantity: u32, side: Side, trader: [u8; 4]) -> Order {
        Order::new(0, price, quantity, side, INSTR, trader)
    }

    #[test]
    fn test_baseline_ids_sequential() {
        let mut engine = BaselineEngine::new();

        let (id1, _) = engine.submit_limit(limit(990_000, 100, Side::Bid, B1));
        let (id2, _) = engine.submit_limit(limit(1_000_000, 100, Side::Ask, A1));

        assert_eq!((id1, id2), (1, 2));
        assert_eq!(engine.len(), 2);
    }

    #[test]
    fn test_baseline_priority_order() {
        let mut engine = BaselineEngine::new();

        engine.submit_limit(limit(980_000, 10, Side::Bid, B1));
        engine.submit_limit(limit(1_000_000, 10, Side::Bid, B1));
        engine.submit_limit(limit(990_000, 10, Side::Bid, B1));

        // best bid first, then descending price
        assert_eq!(engine.bids[0].price, 1_000_000);
        assert_eq!(engine.bids[1].price, 990_000);
        assert_eq!(engine.bids[2].price, 980_000);
    }

    #[test]
    fn test_baseline_fifo_within_price() {
        let mut engine = BaselineEngine::new();

        engine.submit_limit(limit(990_000, 10, Side::Ask, A1)); // id 1
        engine.submit_limit(limit(990_000, 20, Side::Ask, A1)); // id 2

        let (_, execs) = engine.submit_limit(limit(990_000, 15, Side::Bid, B1));

        assert_eq!(execs.len(), 4);
        assert_eq!(execs[0].id, 1);
        assert_eq!(execs[0].quantity, 10);
        assert_eq!(execs[2].id, 2);
        assert_eq!(execs[2].quantity, 5);
    }

    #[test]
    fn test_baseline_match_at_resting_price() {
        let mut engine = BaselineEngine::new();

        engine.submit_limit(limit(990_000, 100, Side::Bid, B1));
        let (_, execs) = engine.submit_limit(limit(980_000, 100, Side::Ask, A1));

        assert_eq!(execs.len(), 2);
        assert_eq!(execs[0].price, 990_000);
        assert_eq!(execs[1].price, 990_000);
        assert!(engine.is_empty());
    }

    #[test]
    fn test_baseline_cancel() {
        let mut engine = BaselineEngine::new();

        engine.submit_limit(limit(990_000, 100, Side::Bid, B1));

        assert!(engine.cancel(1));
        assert!(!engine.cancel(1));
        assert!(!engine.cancel(42));
        assert!(engine.is_empty());
    }
}
