//! Order type for the matchbook engine.
//!
//! ## Fixed-Point Representation
//!
//! Prices are unsigned integers with 4 implied decimal places, following
//! the NASDAQ OUCH convention: a `price` of 1_000_000 means $100.0000.
//! All price comparisons in the engine are plain integer comparisons.
//!
//! ## Wire Layout
//!
//! An order has a fixed 29-byte little-endian encoding, used both as the
//! order slice of a benchmark trace record and as the input to execution
//! digests:
//!
//! ```text
//! id (8) | price (8) | quantity (4) | side (1) | instrument (4) | trader (4)
//! ```

use std::fmt;

/// Order identifier, assigned by the engine on acceptance.
pub type OrderId = u64;

/// Price with 4 implied decimal places (1 unit = 0.0001).
pub type Price = u64;

/// Order quantity in whole units.
pub type Quantity = u32;

/// Opaque 4-byte tag used for instrument and trader identifiers.
pub type Tag = [u8; 4];

/// Length of the fixed order wire encoding in bytes.
pub const ORDER_WIRE_LEN: usize = 29;

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Bid (buy) or Ask (sell).
///
/// The wire representation is a signed byte: +1 = bid, -1 = ask, 0 = invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Side {
    /// Sell side of the book
    Ask = -1,
    /// Buy side of the book
    Bid = 1,
}

impl Side {
    /// Convert to the signed wire byte
    #[inline]
    pub fn to_i8(self) -> i8 {
        self as i8
    }

    /// Convert from the signed wire byte. Zero and any other value are invalid.
    pub fn from_i8(value: i8) -> Option<Self> {
        match value {
            1 => Some(Side::Bid),
            -1 => Some(Side::Ask),
            _ => None,
        }
    }

    /// Returns the opposite side
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => write!(f, "bid"),
            Side::Ask => write!(f, "ask"),
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A limit order.
///
/// The record is `Copy`, compared for equality by all fields, and fits in
/// one cache line. `id` is assigned by the engine on acceptance; whatever
/// the caller puts there is ignored. `quantity` is mutated in place by the
/// matcher as partial fills consume it; every other field is fixed for the
/// life of the order.
///
/// ## Example
///
/// ```
/// use matchbook::{Order, Side};
///
/// // Bid for 100 units at $99.0000
/// let order = Order::new(0, 990_000, 100, Side::Bid, *b"AAPL", *b"B1\0\0");
/// assert_eq!(order.side, Side::Bid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    /// Unique identifier, assigned by the engine on acceptance
    pub id: OrderId,

    /// Limit price (fixed-point, 4 implied decimals)
    pub price: Price,

    /// Remaining quantity; must be > 0 while the order is live
    pub quantity: Quantity,

    /// Bid or Ask
    pub side: Side,

    /// Instrument tag, opaque to the engine
    pub instrument: Tag,

    /// Trader tag, opaque to the engine, copied into executions
    pub trader: Tag,
}

const _: () = assert!(std::mem::size_of::<Order>() <= 64);

impl Order {
    /// Create a new limit order
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

    /// Whether a resting order at `resting_price` on the opposite side
    /// crosses this order. Equal prices cross.
    #[inline]
    pub fn crosses(&self, resting_price: Price) -> bool {
        match self.side {
            Side::Bid => resting_price <= self.price,
            Side::Ask => resting_price >= self.price,
        }
    }

    /// Consume up to `qty` from the remaining quantity.
    ///
    /// Returns the quantity actually consumed.
    #[inline]
    pub fn fill(&mut self, qty: Quantity) -> Quantity {
        let consumed = qty.min(self.quantity);
        self.quantity -= consumed;
        consumed
    }

    /// Check if the order has no remaining quantity
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.quantity == 0
    }

    /// Encode into the fixed 29-byte wire layout (little-endian, packed)
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

    /// Decode from the fixed 29-byte wire layout.
    ///
    /// Returns `None` if the side byte is invalid.
    pub fn from_bytes(buf: &[u8; ORDER_WIRE_LEN]) -> Option<Self> {
        let side = Side::from_i8(buf[20] as i8)?;
        Some(Self {
            id: u64::from_le_bytes(buf[0..8].try_into().expect("8-byte slice")),
            price: u64::from_le_bytes(buf[8..16].try_into().expect("8-byte slice")),
            quantity: u32::from_le_bytes(buf[16..20].try_into().expect("4-byte slice")),
            side,
            instrument: buf[21..25].try_into().expect("4-byte slice"),
            trader: buf[25..29].try_into().expect("4-byte slice"),
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_conversion() {
        assert_eq!(Side::Bid.to_i8(), 1);
        assert_eq!(Side::Ask.to_i8(), -1);
        assert_eq!(Side::from_i8(1), Some(Side::Bid));
        assert_eq!(Side::from_i8(-1), Some(Side::Ask));
        assert_eq!(Side::from_i8(0), None);
        assert_eq!(Side::from_i8(2), None);
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Bid.opposite(), Side::Ask);
        assert_eq!(Side::Ask.opposite(), Side::Bid);
    }

    #[test]
    fn test_order_fits_cache_line() {
        assert!(std::mem::size_of::<Order>() <= 64);
    }

    #[test]
    fn test_order_new() {
        let order = Order::new(7, 990_000, 100, Side::Bid, *b"AAPL", *b"B1\0\0");

        assert_eq!(order.id, 7);
        assert_eq!(order.price, 990_000);
        assert_eq!(order.quantity, 100);
        assert_eq!(order.side, Side::Bid);
        assert_eq!(&order.instrument, b"AAPL");
        assert_eq!(&order.trader, b"B1\0\0");
        assert!(!order.is_filled());
    }

    #[test]
    fn test_crosses_bid() {
        let bid = Order::new(1, 1_000_000, 10, Side::Bid, *b"AAPL", *b"B1\0\0");

        assert!(bid.crosses(990_000));
        assert!(bid.crosses(1_000_000)); // equal prices cross
        assert!(!bid.crosses(1_000_100));
    }

    #[test]
    fn test_crosses_ask() {
        let ask = Order::new(1, 1_000_000, 10, Side::Ask, *b"AAPL", *b"A1\0\0");

        assert!(ask.crosses(1_010_000));
        assert!(ask.crosses(1_000_000)); // equal prices cross
        assert!(!ask.crosses(990_000));
    }

    #[test]
    fn test_order_fill() {
        let mut order = Order::new(1, 990_000, 100, Side::Bid, *b"AAPL", *b"B1\0\0");

        let consumed = order.fill(30);
        assert_eq!(consumed, 30);
        assert_eq!(order.quantity, 70);
        assert!(!order.is_filled());

        let consumed = order.fill(70);
        assert_eq!(consumed, 70);
        assert_eq!(order.quantity, 0);
        assert!(order.is_filled());
    }

    #[test]
    fn test_order_overfill() {
        let mut order = Order::new(1, 990_000, 100, Side::Bid, *b"AAPL", *b"B1\0\0");

        let consumed = order.fill(250);
        assert_eq!(consumed, 100);
        assert!(order.is_filled());
    }

    #[test]
    fn test_order_wire_roundtrip() {
        let order = Order::new(42, 1_005_000, 150, Side::Ask, *b"AAPL", *b"A2\0\0");

        let bytes = order.to_bytes();
        assert_eq!(bytes.len(), ORDER_WIRE_LEN);

        let decoded = Order::from_bytes(&bytes).expect("valid wire bytes");
        assert_eq!(decoded, order);
    }

    #[test]
    fn test_order_wire_layout() {
        let order = Order::new(0x0102, 0x0304, 0x05, Side::Bid, *b"AAPL", *b"B1\0\0");
        let bytes = order.to_bytes();

        // little-endian, packed, no padding
        assert_eq!(bytes[0], 0x02);
        assert_eq!(bytes[1], 0x01);
        assert_eq!(bytes[8], 0x04);
        assert_eq!(bytes[9], 0x03);
        assert_eq!(bytes[16], 0x05);
        assert_eq!(bytes[20] as i8, 1);
        assert_eq!(&bytes[21..25], b"AAPL");
        assert_eq!(&bytes[25..29], b"B1\0\0");
    }

    #[test]
    fn test_order_wire_invalid_side() {
        let mut bytes = Order::new(1, 990_000, 100, Side::Bid, *b"AAPL", *b"B1\0\0").to_bytes();
        bytes[20] = 0;
        assert!(Order::from_bytes(&bytes).is_none());
    }
}
