//! Benchmark trace format: codec, file loader/writer, and a deterministic
//! workload generator.
//!
//! ## Record Layout
//!
//! A trace is a concatenation of fixed 38-byte records, little-endian,
//! packed without alignment padding:
//!
//! ```text
//! offset  width  field
//! 0       1      action: 0 = limit, 1 = cancel
//! 1       8      order.id (ignored; the engine assigns ids)
//! 9       8      order.price
//! 17      4      order.quantity
//! 21      1      order.side: +1 bid, -1 ask, 0 invalid
//! 22      4      order.instrument
//! 26      4      order.trader
//! 30      8      cancel_id
//! ```
//!
//! Trailing partial records at EOF are ignored.
//!
//! ## Replay Digests
//!
//! [`replay_with_digest`] folds every execution leg's wire bytes into a
//! SHA-256 digest, giving a fingerprint of the full execution report.
//! Identical traces must produce identical digests on every engine
//! variant; the stress tests rely on this.

use std::collections::HashMap;
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{info, warn};

use crate::engine::{Engine, MatchEngine};
use crate::types::{Order, OrderId, Price, Quantity, Side, Tag, ORDER_WIRE_LEN};

/// Length of one trace record in bytes.
pub const RECORD_LEN: usize = 38;

const ACTION_LIMIT: u8 = 0;
const ACTION_CANCEL: u8 = 1;

/// Errors produced by the trace codec and file loader.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("trace i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid action byte {0:#04x} in trace record")]
    InvalidAction(u8),

    #[error("invalid side byte {0} in limit record")]
    InvalidSide(i8),
}

// ============================================================================
// Record codec
// ============================================================================

/// One operation of a benchmark trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceOp {
    /// Submit a limit order (its `id` field is ignored on replay)
    Limit(Order),

    /// Cancel the order with this id
    Cancel(OrderId),
}

impl TraceOp {
    /// Encode into one fixed 38-byte record
    pub fn to_bytes(&self) -> [u8; RECORD_LEN] {
        let mut buf = [0u8; RECORD_LEN];
        match self {
            TraceOp::Limit(order) => {
                buf[0] = ACTION_LIMIT;
                buf[1..1 + ORDER_WIRE_LEN].copy_from_slice(&order.to_bytes());
            }
            TraceOp::Cancel(id) => {
                buf[0] = ACTION_CANCEL;
                buf[30..38].copy_from_slice(&id.to_le_bytes());
            }
        }
        buf
    }

    /// Decode one fixed 38-byte record
    pub fn from_bytes(buf: &[u8; RECORD_LEN]) -> Result<Self, TraceError> {
        match buf[0] {
            ACTION_LIMIT => {
                let order_bytes: &[u8; ORDER_WIRE_LEN] = buf[1..1 + ORDER_WIRE_LEN]
                    .try_into()
                    .expect("29-byte slice");
                let order = Order::from_bytes(order_bytes)
                    .ok_or(TraceError::InvalidSide(buf[21] as i8))?;
                Ok(TraceOp::Limit(order))
            }
            ACTION_CANCEL => {
                let id = u64::from_le_bytes(buf[30..38].try_into().expect("8-byte slice"));
                Ok(TraceOp::Cancel(id))
            }
            action => Err(TraceError::InvalidAction(action)),
        }
    }

    /// Check if this is a limit submission
    #[inline]
    pub fn is_limit(&self) -> bool {
        matches!(self, TraceOp::Limit(_))
    }

    /// Check if this is a cancel
    #[inline]
    pub fn is_cancel(&self) -> bool {
        matches!(self, TraceOp::Cancel(_))
    }
}

// ============================================================================
// File loader / writer
// ============================================================================

/// Load a trace file.
///
/// Reads records until EOF; a trailing partial record is ignored. Decode
/// failures on a complete record are errors.
pub fn load_trace<P: AsRef<Path>>(path: P) -> Result<Vec<TraceOp>, TraceError> {
    let bytes = fs::read(&path)?;

    let mut ops = Vec::with_capacity(bytes.len() / RECORD_LEN);
    let mut chunks = bytes.chunks_exact(RECORD_LEN);
    for chunk in &mut chunks {
        let record: &[u8; RECORD_LEN] = chunk.try_into().expect("exact chunk");
        ops.push(TraceOp::from_bytes(record)?);
    }

    if !chunks.remainder().is_empty() {
        warn!(
            trailing_bytes = chunks.remainder().len(),
            "ignoring trailing partial trace record"
        );
    }
    info!(
        records = ops.len(),
        path = %path.as_ref().display(),
        "loaded trace"
    );
    Ok(ops)
}

/// Write a trace file as concatenated fixed-layout records.
pub fn write_trace<P: AsRef<Path>>(path: P, ops: &[TraceOp]) -> Result<(), TraceError> {
    let mut writer = BufWriter::new(File::create(&path)?);
    for op in ops {
        writer.write_all(&op.to_bytes())?;
    }
    writer.flush()?;
    info!(
        records = ops.len(),
        path = %path.as_ref().display(),
        "wrote trace"
    );
    Ok(())
}

// ============================================================================
// Workload generator
// ============================================================================

/// Parameters for synthetic trace generation.
///
/// The presets mirror the benchmark workload shapes: a balanced default
/// mix, a cancel-heavy mix, and a deep-book mix where wide prices build
/// depth instead of crossing.
#[derive(Debug, Clone)]
pub struct TraceConfig {
    /// Center of the price distribution (fixed-point, 4 decimals)
    pub base_price: Price,

    /// Maximum absolute offset from the base price
    pub price_band: u64,

    /// Prices are snapped down to a multiple of this tick
    pub tick: u64,

    /// Quantities are drawn from `1..=max_quantity`
    pub max_quantity: Quantity,

    /// Probability that a step cancels a live order instead of submitting
    pub cancel_rate: f64,
}

impl TraceConfig {
    /// Balanced submit/cancel mix around $100.0000
    pub fn default_mix() -> Self {
        Self {
            base_price: 1_000_000,
            price_band: 50_000,
            tick: 100,
            max_quantity: 500,
            cancel_rate: 0.2,
        }
    }

    /// Cancel-dominated workload
    pub fn cancel_heavy() -> Self {
        Self {
            cancel_rate: 0.6,
            ..Self::default_mix()
        }
    }

    /// Wide price band, so most orders rest and the book grows deep
    pub fn deep_book() -> Self {
        Self {
            price_band: 500_000,
            cancel_rate: 0.1,
            ..Self::default_mix()
        }
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self::default_mix()
    }
}

const GEN_INSTRUMENT: Tag = *b"SYNT";
const GEN_TRADERS: [Tag; 4] = [*b"MM01", *b"MM02", *b"TKR1", *b"TKR2"];

/// Generate a deterministic trace of `count` operations.
///
/// Same seed and config always produce the same trace. A real [`Engine`]
/// runs behind the generator to track which identifiers are still resting,
/// so generated cancels overwhelmingly target live orders, the way real
/// cancel traffic does.
pub fn generate_trace(count: usize, seed: u64, config: &TraceConfig) -> Vec<TraceOp> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut engine = Engine::with_capacity(count);

    // remaining quantity per live resting order; `live_ids` may hold stale
    // entries, discarded lazily when drawn
    let mut resting: HashMap<OrderId, Quantity> = HashMap::new();
    let mut live_ids: Vec<OrderId> = Vec::new();

    let mut ops = Vec::with_capacity(count);

    for _ in 0..count {
        if !live_ids.is_empty() && rng.gen_bool(config.cancel_rate) {
            let mut cancelled = None;
            while !live_ids.is_empty() {
                let idx = rng.gen_range(0..live_ids.len());
                let id = live_ids.swap_remove(idx);
                if resting.remove(&id).is_some() {
                    cancelled = Some(id);
                    break;
                }
            }
            if let Some(id) = cancelled {
                engine.cancel(id);
                ops.push(TraceOp::Cancel(id));
                continue;
            }
        }

        let side = if rng.gen_bool(0.5) { Side::Bid } else { Side::Ask };
        let offset: i64 = rng.gen_range(-(config.price_band as i64)..=config.price_band as i64);
        let price = ((config.base_price as i64 + offset) as u64 / config.tick) * config.tick;
        let quantity: Quantity = rng.gen_range(1..=config.max_quantity);
        let trader = GEN_TRADERS[rng.gen_range(0..GEN_TRADERS.len())];

        let order = Order::new(0, price, quantity, side, GEN_INSTRUMENT, trader);
        let (id, executions) = engine.submit_limit(order);

        // passive legs reduce already-resting orders; the even positions
        // of the report are always the passive side
        let mut aggressive_filled: u64 = 0;
        for pair in executions.chunks(2) {
            let passive = &pair[0];
            aggressive_filled += u64::from(passive.quantity);
            if let Some(remaining) = resting.get_mut(&passive.id) {
                *remaining -= passive.quantity;
                if *remaining == 0 {
                    resting.remove(&passive.id);
                }
            }
        }

        let residual = u64::from(quantity) - aggressive_filled;
        if residual > 0 {
            resting.insert(id, residual as Quantity);
            live_ids.push(id);
        }

        ops.push(TraceOp::Limit(order));
    }

    ops
}

// ============================================================================
// Replay
// ============================================================================

/// Counters accumulated while replaying a trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Limit submissions replayed
    pub limit_orders: u64,

    /// Cancels replayed
    pub cancel_orders: u64,

    /// Cancels that removed a resting order
    pub cancels_accepted: u64,

    /// Execution legs emitted
    pub executions: u64,

    /// Total traded notional (price * quantity, one count per match),
    /// carrying the price's 4 implied decimals
    pub notional: u128,
}

/// Replay a trace through an engine, counting operations and executions.
pub fn replay<E: MatchEngine>(engine: &mut E, ops: &[TraceOp]) -> ReplayStats {
    let mut stats = ReplayStats::default();
    for op in ops {
        match op {
            TraceOp::Limit(order) => {
                let (_, executions) = engine.submit_limit(*order);
                stats.limit_orders += 1;
                stats.executions += executions.len() as u64;
                for pair in executions.chunks(2) {
                    stats.notional += pair[0].notional_raw();
                }
            }
            TraceOp::Cancel(id) => {
                stats.cancel_orders += 1;
                if engine.cancel(*id) {
                    stats.cancels_accepted += 1;
                }
            }
        }
    }
    stats
}

/// Replay a trace and fingerprint the execution report.
///
/// The digest is SHA-256 over the wire bytes of every execution leg in
/// emission order. Two replays agree on their full execution reports iff
/// their digests agree.
pub fn replay_with_digest<E: MatchEngine>(
    engine: &mut E,
    ops: &[TraceOp],
) -> (ReplayStats, [u8; 32]) {
    let mut stats = ReplayStats::default();
    let mut hasher = Sha256::new();

    for op in ops {
        match op {
            TraceOp::Limit(order) => {
                let (_, executions) = engine.submit_limit(*order);
                stats.limit_orders += 1;
                stats.executions += executions.len() as u64;
                for leg in &executions {
                    hasher.update(leg.to_bytes());
                }
                for pair in executions.chunks(2) {
                    stats.notional += pair[0].notional_raw();
                }
            }
            TraceOp::Cancel(id) => {
                stats.cancel_orders += 1;
                if engine.cancel(*id) {
                    stats.cancels_accepted += 1;
                }
            }
        }
    }

    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hasher.finalize());
    (stats, digest)
}

// ============================================================================
// Unit Tests
// ============================================================================
