//! matchbook demo binary.
//!
//! Generates a synthetic trace, replays it through both engine variants,
//! and prints throughput figures alongside the execution-report digest.
//! The two variants must agree on every leg, so their digests must match.

use std::time::Instant;

use matchbook::trace::{self, TraceConfig};
use matchbook::types::price;
use matchbook::{BaselineEngine, Engine};

const TRACE_LEN: usize = 100_000;
const SEED: u64 = 42;

fn main() {
    tracing_subscriber::fmt().compact().init();

    println!("matchbook: price-time-priority limit order matching");
    println!();

    println!("Generating {} operations (seed={})...", TRACE_LEN, SEED);
    let ops = trace::generate_trace(TRACE_LEN, SEED, &TraceConfig::default_mix());
    let limits = ops.iter().filter(|op| op.is_limit()).count();
    println!("  {} limit orders, {} cancels", limits, ops.len() - limits);
    println!();

    let mut engine = Engine::with_capacity(TRACE_LEN);
    let start = Instant::now();
    let (stats, digest) = trace::replay_with_digest(&mut engine, &ops);
    let elapsed = start.elapsed();

    println!("Default engine:");
    println!("  execution legs:    {:>12}", stats.executions);
    println!(
        "  traded notional:   {:>12.0}",
        stats.notional as f64 / 10_000.0
    );
    println!("  cancels accepted:  {:>12}", stats.cancels_accepted);
    println!("  resting orders:    {:>12}", engine.book().len());
    match (engine.book().best_bid(), engine.book().best_ask()) {
        (Some(bid), Some(ask)) => println!(
            "  top of book:       {} / {}",
            price::from_fixed_trimmed(bid),
            price::from_fixed_trimmed(ask)
        ),
        _ => println!("  top of book:       one-sided"),
    }
    println!("  elapsed:           {:>12.2?}", elapsed);
    println!(
        "  throughput:        {:>12.0} ops/sec",
        ops.len() as f64 / elapsed.as_secs_f64()
    );
    println!("  report digest:     {}", hex::encode(digest));
    println!();

    let mut baseline = BaselineEngine::new();
    let start = Instant::now();
    let (base_stats, base_digest) = trace::replay_with_digest(&mut baseline, &ops);
    let elapsed = start.elapsed();

    println!("Baseline engine:");
    println!("  execution legs:    {:>12}", base_stats.executions);
    println!("  elapsed:           {:>12.2?}", elapsed);
    println!("  report digest:     {}", hex::encode(base_digest));
    println!();

    if digest == base_digest {
        println!("Engines agree: identical execution reports.");
    } else {
        println!("ERROR: engine variants diverged!");
        std::process::exit(1);
    }
}
