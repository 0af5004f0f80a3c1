//! Price level: the FIFO queue of resting orders at a single price.
//!
//! ## Queue Structure
//!
//! ```text
//! head (oldest) <-> order2 <-> order3 <-> tail (newest)
//! ```
//!
//! - New orders are appended at the tail
//! - Matching consumes orders from the head
//! - Any order can be unlinked in O(1) given its slab key
//!
//! Since the engine assigns identifiers monotonically and orders arrive in
//! id order, walking head to tail always visits strictly ascending ids.

use slab::Slab;

use crate::book::node::OrderNode;
use crate::types::{Price, Quantity};

/// All resting orders at one price, in arrival order.
///
/// The order data lives in the slab; this struct only holds the queue
/// endpoints and aggregate totals.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    /// Price for this level (fixed-point, 4 implied decimals)
    pub price: Price,

    /// Total remaining quantity across the level
    pub total_quantity: u64,

    /// Head of the queue (oldest order, first to match), slab key
    pub head: Option<usize>,

    /// Tail of the queue (newest order), slab key
    pub tail: Option<usize>,

    /// Number of orders at this level
    pub order_count: usize,
}

impl PriceLevel {
    /// Create an empty level at `price`
    pub fn new(price: Price) -> Self {
        Self {
            price,
            total_quantity: 0,
            head: None,
            tail: None,
            order_count: 0,
        }
    }

    /// Check if the level holds no orders
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order_count == 0
    }

    /// Get the head order's slab key (oldest order, first to match)
    #[inline]
    pub fn peek_head(&self) -> Option<usize> {
        self.head
    }

    /// Append an order at the tail of the queue.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not present in the slab.
    pub fn push_back(&mut self, key: usize, slab: &mut Slab<OrderNode>) {
        let node = slab.get_mut(key).expect("invalid slab key");
        let quantity = node.quantity();

        node.prev = self.tail;
        node.next = None;

        if let Some(tail_key) = self.tail {
            let tail_node = slab.get_mut(tail_key).expect("invalid tail key");
            tail_node.next = Some(key);
        } else {
            self.head = Some(key);
        }

        self.tail = Some(key);
        self.order_count += 1;
        self.total_quantity += u64::from(quantity);
    }

    /// Unlink an order from the queue by slab key.
    ///
    /// Returns the remaining quantity of the removed order. The node stays
    /// in the slab; the caller decides whether to free it.
    pub fn remove(&mut self, key: usize, slab: &mut Slab<OrderNode>) -> Quantity {
        let node = slab.get(key).expect("invalid slab key");
        let quantity = node.quantity();
        let prev_key = node.prev;
        let next_key = node.next;

        if let Some(prev) = prev_key {
            let prev_node = slab.get_mut(prev).expect("invalid prev key");
            prev_node.next = next_key;
        } else {
            self.head = next_key;
        }

        if let Some(next) = next_key {
            let next_node = slab.get_mut(next).expect("invalid next key");
            next_node.prev = prev_key;
        } else {
            self.tail = prev_key;
        }

        let node = slab.get_mut(key).expect("invalid slab key");
        node.prev = None;
        node.next = None;

        self.order_count -= 1;
        self.total_quantity -= u64::from(quantity);

        quantity
    }

    /// Reduce the level total after a partial fill of one of its orders
    #[inline]
    pub fn reduce_quantity(&mut self, filled: Quantity) {
        self.total_quantity -= u64::from(filled);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
