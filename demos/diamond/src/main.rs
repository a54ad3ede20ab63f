//! diamond — smallest example for the antfarm colony-routing framework.
//!
//! Routes a handful of ants across the two-lane diamond map and prints
//! every step.  No files, no arguments; run it to see the scheduler's
//! output shape.

mod network;

use std::time::Instant;

use anyhow::Result;

use ant_core::{SimConfig, Step};
use ant_graph::TunnelNetwork;
use ant_sim::{MoveEvent, SimBuilder, StepObserver};

use network::build_network;

const ANT_COUNT: usize = 4;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints one line per step that moved, in the classic `L<ant>-<room>`
/// shape (ants rendered 1-based).
struct MovePrinter;

impl StepObserver for MovePrinter {
    fn on_step(&mut self, step: Step, moves: &[MoveEvent], net: &TunnelNetwork) {
        if moves.is_empty() {
            return;
        }
        let line: Vec<String> = moves
            .iter()
            .map(|m| format!("L{}-{}", m.ant.0 + 1, net.room_name(m.room)))
            .collect();
        println!("{step}: {}", line.join(" "));
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== diamond — antfarm colony routing ===");
    println!("Ants: {ANT_COUNT}");
    println!();

    // 1. Build the colony map.
    let net = build_network();
    println!(
        "Colony: {} rooms, {} tunnels, {} → {}",
        net.room_count(),
        net.tunnel_count() / 2,
        net.room_name(net.start),
        net.room_name(net.end),
    );
    println!();

    // 2. Plan and run.
    let mut sim = SimBuilder::new(net, ANT_COUNT, SimConfig::default()).build()?;

    let t0 = Instant::now();
    let summary = sim.run(&mut MovePrinter)?;
    let elapsed = t0.elapsed();

    // 3. Summary.
    println!();
    println!(
        "Delivered {} ants in {} steps ({} hops, {:.6} s)",
        ANT_COUNT,
        summary.steps,
        summary.moves,
        elapsed.as_secs_f64(),
    );

    Ok(())
}
