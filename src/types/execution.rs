//! Execution type representing one leg of a trade.
//!
//! Every match produces exactly two executions sharing price and quantity:
//! the passive (resting) leg first, the aggressive (incoming) leg second.
//! The traded price is always the resting order's limit price, so an
//! aggressive order may execute at a price better than its own limit.

use crate::types::order::{Order, OrderId, Price, Quantity, Side, Tag, ORDER_WIRE_LEN};

/// One leg of a trade.
///
/// An execution names the party (by order id, side, trader, instrument),
/// the traded price, and the traded quantity. It carries the same field
/// set as [`Order`] so scenario expectations can be compared field for
/// field against the orders that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Execution {
    /// Order id of the party to this leg
    pub id: OrderId,

    /// Traded price (always the resting order's limit price)
    pub price: Price,

    /// Traded quantity
    pub quantity: Quantity,

    /// Side of the party to this leg
    pub side: Side,

    /// Instrument tag, copied from the order
    pub instrument: Tag,

    /// Trader tag, copied from the order
    pub trader: Tag,
}

impl Execution {
    /// Create an execution leg field by field
    pub fn new(
        id: OrderId,
        price: Price,
        quantity: Quantity,
        side: Side,
        instrument: Tag,
        trader: Tag,
    ) -> Self {
        Self {
            id,
            price,
            quantity,
            side,
            instrument,
            trader,
        }
    }

    /// Create the leg reporting `order`'s participation in a match at
    /// `price` for `quantity` units.
    #[inline]
    pub fn leg(order: &Order, price: Price, quantity: Quantity) -> Self {
        Self {
            id: order.id,
            price,
            quantity,
            side: order.side,
            instrument: order.instrument,
            trader: order.trader,
        }
    }

    /// Notional value of this leg (price * quantity) in raw fixed-point.
    ///
    /// The result carries the price's 4 implied decimals.
    pub fn notional_raw(&self) -> u128 {
        (self.price as u128) * (self.quantity as u128)
    }

    /// Encode into the fixed 29-byte wire layout shared with [`Order`].
    ///
    /// Used to feed execution streams into replay digests.
    pub fn to_bytes(&self) -> [u8; ORDER_WIRE_LEN] {
        let mut buf = [0u8; ORDER_WIRE_LEN];
        buf[0..8].copy_from_slice(&self.id.to_le_bytes());
        buf[8..16].copy_from_slice(&self.price.to_le_bytes());
        buf[16..20].copy_from_slice(&self.quantity.to_le_bytes());
        buf[20] = self.side.to_i8() as u8;
        buf[21..25].copy_from_slice(&self.instrument);
        buf[25..29].copy_from_slice(&self.trader);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_leg_copies_order_fields() {
        let order = Order::new(5, 995_000, 150, Side::Ask, *b"AAPL", *b"A2\0\0");
        let leg = Execution::leg(&order, 995_000, 120);

        assert_eq!(leg.id, 5);
        assert_eq!(leg.price, 995_000);
        assert_eq!(leg.quantity, 120);
        assert_eq!(leg.side, Side::Ask);
        assert_eq!(&leg.instrument, b"AAPL");
        assert_eq!(&leg.trader, b"A2\0\0");
    }

    #[test]
    fn test_execution_notional() {
        let leg = Execution::new(1, 1_000_000, 50, Side::Bid, *b"AAPL", *b"B1\0\0");
        // $100.0000 * 50 units
        assert_eq!(leg.notional_raw(), 50_000_000u128);
    }

    #[test]
    fn test_execution_wire_matches_order_wire() {
        let order = Order::new(9, 1_010_000, 75, Side::Bid, *b"AAPL", *b"B2\0\0");
        let leg = Execution::leg(&order, order.price, order.quantity);

        assert_eq!(leg.to_bytes(), order.to_bytes());
    }
}
